//! [`ConfigStore`] implementation over the platform's JSON files.

use std::future::Future;
use std::path::{Path, PathBuf};

use uidpatch_app::ports::ConfigStore;
use uidpatch_domain::device::DevicesDocument;
use uidpatch_domain::entry::EntriesDocument;
use uidpatch_domain::error::{DocumentKind, PatchError};
use uidpatch_domain::time;

use crate::error::StorageError;
use crate::file::{backup_and_write, encode_document, load_document};

/// File-backed store for the entries document and the device registry.
///
/// Holds only paths, so it is cheap to clone and share between services.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    entries_path: PathBuf,
    devices_path: PathBuf,
}

impl JsonFileStore {
    /// Create a store reading the given files.
    #[must_use]
    pub fn new(entries_path: PathBuf, devices_path: PathBuf) -> Self {
        Self {
            entries_path,
            devices_path,
        }
    }

    #[must_use]
    pub fn entries_path(&self) -> &Path {
        &self.entries_path
    }

    #[must_use]
    pub fn devices_path(&self) -> &Path {
        &self.devices_path
    }
}

impl ConfigStore for JsonFileStore {
    fn load_entries(
        &self,
    ) -> impl Future<Output = Result<Option<EntriesDocument>, PatchError>> + Send {
        let path = self.entries_path.clone();
        async move {
            let Some(value) = load_document(&path, DocumentKind::Entries).await? else {
                return Ok(None);
            };
            Ok(Some(EntriesDocument::from_value(value)?))
        }
    }

    fn load_devices(
        &self,
    ) -> impl Future<Output = Result<Option<DevicesDocument>, PatchError>> + Send {
        let path = self.devices_path.clone();
        async move {
            let Some(value) = load_document(&path, DocumentKind::Devices).await? else {
                return Ok(None);
            };
            Ok(Some(DevicesDocument::from_value(&value)?))
        }
    }

    fn persist_entries(
        &self,
        entries: &EntriesDocument,
    ) -> impl Future<Output = Result<PathBuf, PatchError>> + Send {
        let path = self.entries_path.clone();
        let encoded = encode_document(entries.as_value());
        async move {
            let contents = encoded.map_err(StorageError::from)?;
            let backup = backup_and_write(&path, contents, &time::now()).await?;
            tracing::info!(
                path = %path.display(),
                backup = %backup.display(),
                "persisted config entries"
            );
            Ok(backup)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, STORAGE_DIR};
    use crate::file::BACKUP_SUFFIX;
    use uidpatch_domain::error::MalformedError;
    use uidpatch_domain::merge::merge_bulk_update;
    use uidpatch_domain::request::BulkUpdateRequest;

    const ENTRIES: &str = r#"{
    "version": 1,
    "minor_version": 5,
    "key": "core.config_entries",
    "data": {
        "entries": [
            {
                "entry_id": "01J0ABC",
                "version": 1,
                "domain": "shelly",
                "title": "リビング - OLD123",
                "data": {
                    "host": "192.168.1.20"
                },
                "options": {},
                "unique_id": "OLD123",
                "disabled_by": null
            },
            {
                "entry_id": "01J0DEF",
                "domain": "sun",
                "title": "Sun",
                "unique_id": null
            }
        ]
    }
}"#;

    const DEVICES: &str = r#"{
    "version": 1,
    "data": {
        "devices": [
            {
                "config_entries": ["01J0ABC"],
                "connections": [["mac", "aa:bb:cc:dd:ee:ff"]],
                "name": "Shelly Plug"
            }
        ]
    }
}"#;

    fn setup(
        entries: Option<&str>,
        devices: Option<&str>,
    ) -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(STORAGE_DIR)).unwrap();
        let store = Config {
            config_dir: dir.path().to_path_buf(),
        }
        .build();
        if let Some(entries) = entries {
            std::fs::write(store.entries_path(), entries).unwrap();
        }
        if let Some(devices) = devices {
            std::fs::write(store.devices_path(), devices).unwrap();
        }
        (dir, store)
    }

    fn backups(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir.join(STORAGE_DIR))
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.to_string_lossy().contains(BACKUP_SUFFIX))
            .collect()
    }

    #[tokio::test]
    async fn should_report_absent_documents() {
        let (_dir, store) = setup(None, None);
        assert!(store.load_entries().await.unwrap().is_none());
        assert!(store.load_devices().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_report_malformed_entries() {
        let (_dir, store) = setup(Some("{\"data\": "), None);
        let result = store.load_entries().await;
        assert!(matches!(
            result,
            Err(PatchError::Malformed(MalformedError::Json { .. }))
        ));
    }

    #[tokio::test]
    async fn should_report_non_object_entries_as_malformed() {
        let (_dir, store) = setup(Some("[]"), None);
        let result = store.load_entries().await;
        assert!(matches!(
            result,
            Err(PatchError::Malformed(MalformedError::NotAnObject { .. }))
        ));
    }

    #[tokio::test]
    async fn should_load_both_documents() {
        let (_dir, store) = setup(Some(ENTRIES), Some(DEVICES));
        let entries = store.load_entries().await.unwrap().unwrap();
        let devices = store.load_devices().await.unwrap().unwrap();
        assert_eq!(entries.entries().len(), 2);
        assert_eq!(devices.devices().len(), 1);
    }

    #[tokio::test]
    async fn should_round_trip_through_persist_and_load() {
        let (dir, store) = setup(Some(ENTRIES), Some(DEVICES));
        let mut entries = store.load_entries().await.unwrap().unwrap();
        let devices = store.load_devices().await.unwrap();
        let request = BulkUpdateRequest::builder()
            .sync_address("01J0ABC")
            .update_title("01J0ABC")
            .build();
        let report = merge_bulk_update(&mut entries, devices.as_ref(), &request);
        assert_eq!(report.changed_count(), 1);

        let backup = store.persist_entries(&entries).await.unwrap();

        let reloaded = store.load_entries().await.unwrap().unwrap();
        assert_eq!(reloaded, entries);
        assert_eq!(
            reloaded.entries()[0].title,
            "リビング - aa:bb:cc:dd:ee:ff"
        );
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), ENTRIES);
        assert_eq!(backups(dir.path()), vec![backup]);
    }

    #[tokio::test]
    async fn should_write_same_layout_as_platform() {
        let (_dir, store) = setup(Some(ENTRIES), None);
        let entries = store.load_entries().await.unwrap().unwrap();

        store.persist_entries(&entries).await.unwrap();

        let written = std::fs::read_to_string(store.entries_path()).unwrap();
        assert_eq!(written, ENTRIES);
    }

    #[tokio::test]
    async fn should_fail_persist_when_live_file_missing() {
        let (dir, store) = setup(None, None);
        let entries = EntriesDocument::from_value(serde_json::json!({ "data": {} })).unwrap();

        let result = store.persist_entries(&entries).await;

        assert!(matches!(result, Err(PatchError::Storage(_))));
        assert!(!store.entries_path().exists());
        assert!(backups(dir.path()).is_empty());
    }
}
