//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use uidpatch_domain::error::PatchError;

/// Maps [`PatchError`] to a plain-text HTTP response, depending on which page
/// failed.
#[derive(Debug)]
pub enum PageError {
    /// The entry listing could not be built.
    Listing(PatchError),
    /// A bulk update did not complete. Nothing was written to the live file.
    BulkUpdate(PatchError),
}

impl PageError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Listing(PatchError::Unavailable(_)) => (
                StatusCode::NOT_FOUND,
                "core.config_entries not found. Ensure the configuration directory is correctly mapped."
                    .to_string(),
            ),
            Self::Listing(PatchError::Malformed(err)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read entries: {err}"),
            ),
            Self::Listing(PatchError::Storage(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read entries".to_string(),
            ),
            Self::BulkUpdate(PatchError::Unavailable(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load entries".to_string(),
            ),
            Self::BulkUpdate(PatchError::Malformed(err)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to load entries: {err}. No changes were persisted."),
            ),
            Self::BulkUpdate(PatchError::Storage(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save changes. No changes were persisted.".to_string(),
            ),
        }
    }

    fn patch_error(&self) -> &PatchError {
        match self {
            Self::Listing(err) | Self::BulkUpdate(err) => err,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        match self.patch_error() {
            PatchError::Unavailable(err) => tracing::warn!(error = %err, "document unavailable"),
            PatchError::Malformed(err) => tracing::error!(error = ?err, "malformed document"),
            PatchError::Storage(err) => tracing::error!(error = ?err, "storage error"),
        }
        (status, message).into_response()
    }
}
