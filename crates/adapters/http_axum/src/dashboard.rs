//! Server-side rendered HTML editor (no JavaScript).
//!
//! - `GET  /`             — entry listing holding the bulk-update form
//! - `POST /update_bulk`  — apply the form, then either redirect back to the
//!   listing (nothing changed, PRG) or render the restart confirmation
//!
//! Every page accepts a `lang` parameter (`ja` or `en`).

#[allow(clippy::missing_errors_doc)]
pub mod bulk_update;
#[allow(clippy::missing_errors_doc)]
pub mod entries;

use axum::Router;
use axum::routing::{get, post};

use uidpatch_app::ports::ConfigStore;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ConfigStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(entries::list::<S>))
        .route("/update_bulk", post(bulk_update::submit::<S>))
}
