//! Bulk update form handler and restart confirmation page.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use uidpatch_app::ports::ConfigStore;
use uidpatch_app::services::bulk_update_service::BulkUpdateOutcome;
use uidpatch_domain::entry::ConfigEntry;
use uidpatch_domain::request::BulkUpdateRequest;

use crate::error::PageError;
use crate::i18n::{Lang, Texts};
use crate::state::AppState;

/// Checkbox field listing entries whose id should follow the detected address.
pub const SYNC_MAC_FIELD: &str = "sync_mac_ids";
/// Checkbox field listing entries whose title should be regenerated.
pub const UPDATE_TITLE_FIELD: &str = "update_title_ids";
/// Prefix of the per-entry manual id text field (`new_id_<entry_id>`).
pub const MANUAL_ID_PREFIX: &str = "new_id_";
const LANG_FIELD: &str = "lang";

/// Turn the submitted form pairs into a request and the page language.
///
/// Checkbox fields repeat once per checked entry, so the form is read as a
/// list of pairs rather than a struct. Unknown fields are ignored.
#[must_use]
pub fn parse_form(fields: Vec<(String, String)>) -> (BulkUpdateRequest, Lang) {
    let mut builder = BulkUpdateRequest::builder();
    let mut lang = None;

    for (name, value) in fields {
        match name.as_str() {
            SYNC_MAC_FIELD => builder = builder.sync_address(value),
            UPDATE_TITLE_FIELD => builder = builder.update_title(value),
            LANG_FIELD => lang = Some(value),
            other => {
                if let Some(entry_id) = other.strip_prefix(MANUAL_ID_PREFIX) {
                    builder = builder.manual_id(entry_id, value);
                }
            }
        }
    }

    (builder.build(), Lang::from_param(lang.as_deref()))
}

/// Restart confirmation page template.
#[derive(Template)]
#[template(path = "restart_confirm.html")]
pub struct RestartConfirmTemplate {
    texts: &'static Texts,
    lang: &'static str,
    changes_msg: String,
    entries: Vec<ConfigEntry>,
}

impl IntoResponse for RestartConfirmTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Response from the bulk update form handler.
pub enum SubmitResponse {
    /// Nothing changed: back to the listing (PRG).
    Redirect(Redirect),
    /// Changes were saved: ask the operator to restart the platform.
    Saved(RestartConfirmTemplate),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
            Self::Saved(page) => page.into_response(),
        }
    }
}

/// `POST /update_bulk` — apply address sync, manual ids and title updates.
pub async fn submit<S>(
    State(state): State<AppState<S>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<SubmitResponse, PageError>
where
    S: ConfigStore + Send + Sync + 'static,
{
    let (request, lang) = parse_form(fields);
    let outcome = state
        .bulk_update_service
        .bulk_update(&request)
        .await
        .map_err(PageError::BulkUpdate)?;

    Ok(match outcome {
        BulkUpdateOutcome::NoChanges => {
            SubmitResponse::Redirect(Redirect::to(&format!("/?lang={}", lang.code())))
        }
        BulkUpdateOutcome::Saved {
            changed_count,
            entries,
            ..
        } => SubmitResponse::Saved(RestartConfirmTemplate {
            texts: lang.texts(),
            lang: lang.code(),
            changes_msg: lang.texts().result_msg(changed_count),
            entries,
        }),
    })
}
