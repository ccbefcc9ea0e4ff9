//! Storage-specific error type wrapping filesystem and JSON errors.

use std::path::PathBuf;

use uidpatch_domain::error::{DocumentKind, MalformedError, PatchError};

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading a document failed for a reason other than its absence.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid JSON.
    #[error("failed to parse {document} document")]
    Parse {
        document: DocumentKind,
        #[source]
        source: serde_json::Error,
    },

    /// The live entries file vanished between load and persist.
    #[error("cannot back up {}: file does not exist", .path.display())]
    MissingLiveFile { path: PathBuf },

    /// Copying the live file to its backup location failed.
    #[error("failed to back up {} to {}", .path.display(), .backup.display())]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding the document failed.
    #[error("failed to encode document")]
    Encode(#[from] serde_json::Error),

    /// Overwriting the live file failed.
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<StorageError> for PatchError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Parse { document, source } => {
                MalformedError::Json { document, source }.into()
            }
            other => Self::Storage(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_parse_error_to_malformed() {
        let source = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err: PatchError = StorageError::Parse {
            document: DocumentKind::Entries,
            source,
        }
        .into();
        assert!(matches!(
            err,
            PatchError::Malformed(MalformedError::Json {
                document: DocumentKind::Entries,
                ..
            })
        ));
    }

    #[test]
    fn should_convert_missing_live_file_to_storage_error() {
        let err: PatchError = StorageError::MissingLiveFile {
            path: PathBuf::from("/config/.storage/core.config_entries"),
        }
        .into();
        assert!(matches!(err, PatchError::Storage(_)));
    }

    #[test]
    fn should_display_path_in_message() {
        let err = StorageError::MissingLiveFile {
            path: PathBuf::from("/tmp/core.config_entries"),
        };
        assert_eq!(
            err.to_string(),
            "cannot back up /tmp/core.config_entries: file does not exist"
        );
    }
}
