//! Low-level document IO: load, encode, back up and overwrite.

use std::fs::{FileTimes, Metadata};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use uidpatch_domain::error::DocumentKind;
use uidpatch_domain::time::{Timestamp, backup_stamp};

use crate::error::StorageError;

/// Marker inserted between the live path and the backup timestamp.
pub const BACKUP_SUFFIX: &str = ".bak_";

const INDENT: &[u8] = b"    ";

/// Read and parse the JSON document at `path`.
///
/// A missing file is `Ok(None)`, never an error. Every call reads the disk.
///
/// # Errors
///
/// Returns [`StorageError::Read`] when the file exists but cannot be read and
/// [`StorageError::Parse`] when it is not valid JSON.
pub async fn load_document(
    path: &Path,
    document: DocumentKind,
) -> Result<Option<Value>, StorageError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), %document, "document not found");
            return Ok(None);
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value = serde_json::from_slice(&bytes)
        .map_err(|source| StorageError::Parse { document, source })?;
    tracing::debug!(path = %path.display(), %document, size = bytes.len(), "loaded document");
    Ok(Some(value))
}

/// Backup location for `live` taken at `at`: `<live>.bak_<YYYYMMDD_HHMMSS>`.
#[must_use]
pub fn backup_path(live: &Path, at: &Timestamp) -> PathBuf {
    let mut name = live.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    name.push(backup_stamp(at));
    PathBuf::from(name)
}

/// Encode `value` with 4-space indentation, keys in their in-memory order and
/// non-ASCII characters written as-is.
///
/// # Errors
///
/// Returns the serializer error, which cannot happen for a plain JSON value.
pub fn encode_document(value: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(out)
}

/// Give `backup` the access and modification times recorded in `metadata`.
async fn copy_times(metadata: &Metadata, backup: &Path) -> std::io::Result<()> {
    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    let file = tokio::fs::OpenOptions::new()
        .write(true)
        .open(backup)
        .await?
        .into_std()
        .await;
    tokio::task::spawn_blocking(move || file.set_times(times))
        .await
        .map_err(std::io::Error::other)?
}

/// Copy `live` to its timestamped backup, then overwrite it with `contents`.
///
/// The backup keeps the content, permissions and timestamps of `live`.
/// Nothing is written to `live` unless the backup succeeded. A failed write
/// is not rolled back; the backup holds the previous content.
///
/// # Errors
///
/// Returns [`StorageError::MissingLiveFile`] when `live` does not exist,
/// [`StorageError::Backup`] when the copy fails and [`StorageError::Write`]
/// when overwriting fails.
pub async fn backup_and_write(
    live: &Path,
    contents: Vec<u8>,
    at: &Timestamp,
) -> Result<PathBuf, StorageError> {
    let backup = backup_path(live, at);

    let copied: std::io::Result<()> = async {
        let metadata = tokio::fs::metadata(live).await?;
        tokio::fs::copy(live, &backup).await?;
        copy_times(&metadata, &backup).await
    }
    .await;
    match copied {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(StorageError::MissingLiveFile {
                path: live.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(StorageError::Backup {
                path: live.to_path_buf(),
                backup,
                source,
            });
        }
    }
    tracing::debug!(backup = %backup.display(), "created backup");

    tokio::fs::write(live, contents)
        .await
        .map_err(|source| StorageError::Write {
            path: live.to_path_buf(),
            source,
        })?;

    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    use chrono::{Local, TimeZone};
    use serde_json::json;

    fn fixed_time() -> Timestamp {
        Local.with_ymd_and_hms(2025, 1, 31, 23, 59, 7).unwrap()
    }

    #[test]
    fn should_append_timestamp_to_live_path() {
        let path = backup_path(
            Path::new("/config/.storage/core.config_entries"),
            &fixed_time(),
        );
        assert_eq!(
            path,
            Path::new("/config/.storage/core.config_entries.bak_20250131_235907")
        );
    }

    #[test]
    fn should_encode_with_four_space_indent_and_literal_unicode() {
        let bytes = encode_document(&json!({ "b": { "title": "リビング" }, "a": 1 })).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "{\n    \"b\": {\n        \"title\": \"リビング\"\n    },\n    \"a\": 1\n}"
        );
    }

    #[tokio::test]
    async fn should_return_none_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_document(&dir.path().join("missing"), DocumentKind::Entries)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_fail_loudly_on_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("core.config_entries");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_document(&path, DocumentKind::Entries).await;
        assert!(matches!(
            result,
            Err(StorageError::Parse {
                document: DocumentKind::Entries,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn should_back_up_previous_content_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("core.config_entries");
        std::fs::write(&live, "{\"old\": true}").unwrap();

        let backup = backup_and_write(&live, b"{\"new\": true}".to_vec(), &fixed_time())
            .await
            .unwrap();

        assert_eq!(backup, backup_path(&live, &fixed_time()));
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "{\"old\": true}");
        assert_eq!(std::fs::read_to_string(&live).unwrap(), "{\"new\": true}");
    }

    #[tokio::test]
    async fn should_refuse_to_write_without_live_file() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("core.config_entries");

        let result = backup_and_write(&live, b"{}".to_vec(), &fixed_time()).await;

        assert!(matches!(result, Err(StorageError::MissingLiveFile { .. })));
        assert!(!live.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn should_keep_live_timestamps_on_backup() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("core.config_entries");
        std::fs::write(&live, "{}").unwrap();
        let old = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        std::fs::File::options()
            .write(true)
            .open(&live)
            .unwrap()
            .set_modified(old)
            .unwrap();

        let backup = backup_and_write(&live, b"{\"new\": true}".to_vec(), &fixed_time())
            .await
            .unwrap();

        let modified = std::fs::metadata(&backup).unwrap().modified().unwrap();
        assert_eq!(modified, old);
    }

    #[tokio::test]
    async fn should_leave_live_file_alone_when_backup_fails() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("core.config_entries");
        std::fs::write(&live, "{\"old\": true}").unwrap();
        // a directory squatting on the backup name makes the copy fail
        std::fs::create_dir(backup_path(&live, &fixed_time())).unwrap();

        let result = backup_and_write(&live, b"{\"new\": true}".to_vec(), &fixed_time()).await;

        assert!(matches!(result, Err(StorageError::Backup { .. })));
        assert_eq!(std::fs::read_to_string(&live).unwrap(), "{\"old\": true}");
    }
}
