//! Entry listing page.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use uidpatch_app::ports::ConfigStore;
use uidpatch_app::services::entry_service::EntryListing;

use crate::error::PageError;
use crate::i18n::{Lang, Texts};
use crate::state::AppState;

/// One row of the listing table.
pub struct EntryRow {
    pub entry_id: String,
    pub domain: String,
    pub title: String,
    pub current_id: String,
    /// Empty when no hardware address was found.
    pub detected_mac: String,
    /// The detected address is already the stored id.
    pub in_sync: bool,
}

impl From<EntryListing> for EntryRow {
    fn from(listing: EntryListing) -> Self {
        let current_id = listing.entry.unique_id.unwrap_or_default();
        let detected_mac = listing.detected_mac.unwrap_or_default();
        Self {
            in_sync: !detected_mac.is_empty() && detected_mac == current_id,
            entry_id: listing.entry.entry_id,
            domain: listing.entry.domain,
            title: listing.entry.title,
            current_id,
            detected_mac,
        }
    }
}

/// Entry listing page template.
#[derive(Template)]
#[template(path = "entry_list.html")]
pub struct EntryListTemplate {
    texts: &'static Texts,
    lang: &'static str,
    other_lang: &'static str,
    rows: Vec<EntryRow>,
}

impl IntoResponse for EntryListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Query string accepted by the listing page.
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

/// `GET /` — list config entries sorted by domain.
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<LangQuery>,
) -> Result<EntryListTemplate, PageError>
where
    S: ConfigStore + Send + Sync + 'static,
{
    let lang = Lang::from_param(query.lang.as_deref());
    let listings = state
        .entry_service
        .list_entries()
        .await
        .map_err(PageError::Listing)?;

    Ok(EntryListTemplate {
        texts: lang.texts(),
        lang: lang.code(),
        other_lang: lang.other().code(),
        rows: listings.into_iter().map(EntryRow::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uidpatch_domain::entry::ConfigEntry;

    fn listing(unique_id: Option<&str>, detected_mac: Option<&str>) -> EntryListing {
        EntryListing {
            entry: ConfigEntry {
                entry_id: "abc".to_string(),
                domain: "shelly".to_string(),
                unique_id: unique_id.map(ToString::to_string),
                title: "Plug".to_string(),
            },
            detected_mac: detected_mac.map(ToString::to_string),
        }
    }

    #[test]
    fn should_mark_row_in_sync_when_mac_matches() {
        let row = EntryRow::from(listing(Some("AA:BB"), Some("AA:BB")));
        assert!(row.in_sync);
    }

    #[test]
    fn should_not_mark_row_in_sync_without_mac() {
        let row = EntryRow::from(listing(None, None));
        assert!(!row.in_sync);
        assert!(row.current_id.is_empty());
        assert!(row.detected_mac.is_empty());
    }

    #[test]
    fn should_render_form_fields_for_each_entry() {
        let html = EntryListTemplate {
            texts: Lang::En.texts(),
            lang: "en",
            other_lang: "ja",
            rows: vec![EntryRow::from(listing(Some("OLD"), Some("AA:BB")))],
        }
        .to_string();

        assert!(html.contains("name=\"new_id_abc\""));
        assert!(html.contains("name=\"sync_mac_ids\" value=\"abc\""));
        assert!(html.contains("name=\"update_title_ids\" value=\"abc\""));
        assert!(html.contains("name=\"lang\" value=\"en\""));
        assert!(html.contains("AA:BB"));
        assert!(html.contains("Update Selected"));
    }

    #[test]
    fn should_escape_entry_titles() {
        let mut entry = listing(Some("OLD"), None);
        entry.entry.title = "<script>".to_string();
        let html = EntryListTemplate {
            texts: Lang::Ja.texts(),
            lang: "ja",
            other_lang: "en",
            rows: vec![EntryRow::from(entry)],
        }
        .to_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
