//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PatchError`]
//! via `#[from]` / `From`.

/// Which on-disk document an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// `core.config_entries`.
    Entries,
    /// `core.device_registry`.
    Devices,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entries => f.write_str("config entries"),
            Self::Devices => f.write_str("device registry"),
        }
    }
}

/// A required document does not exist on disk.
#[derive(Debug, thiserror::Error)]
#[error("{document} document is unavailable")]
pub struct UnavailableError {
    pub document: DocumentKind,
}

/// A document could not be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum MalformedError {
    /// The file is not valid JSON.
    #[error("{document} document is not valid JSON")]
    Json {
        document: DocumentKind,
        #[source]
        source: serde_json::Error,
    },
    /// The file is valid JSON but the top-level value is not an object.
    #[error("{document} document must be a JSON object")]
    NotAnObject { document: DocumentKind },
}

/// Base error for every fallible uidpatch operation.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("unavailable")]
    Unavailable(#[from] UnavailableError),

    #[error("malformed document")]
    Malformed(#[from] MalformedError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
