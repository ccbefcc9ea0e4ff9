//! Location of the platform's `.storage` documents.

use std::path::PathBuf;

use crate::store::JsonFileStore;

/// Directory holding the platform's persisted documents, relative to the config root.
pub const STORAGE_DIR: &str = ".storage";
/// File name of the config entries document.
pub const ENTRIES_FILE: &str = "core.config_entries";
/// File name of the device registry document.
pub const DEVICES_FILE: &str = "core.device_registry";

/// Configuration for the JSON file storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Platform configuration root (e.g. `/config`).
    pub config_dir: PathBuf,
}

impl Config {
    /// Path of `core.config_entries` under the config root.
    #[must_use]
    pub fn entries_path(&self) -> PathBuf {
        self.config_dir.join(STORAGE_DIR).join(ENTRIES_FILE)
    }

    /// Path of `core.device_registry` under the config root.
    #[must_use]
    pub fn devices_path(&self) -> PathBuf {
        self.config_dir.join(STORAGE_DIR).join(DEVICES_FILE)
    }

    /// Build a [`JsonFileStore`] from this configuration.
    ///
    /// Nothing is read at this point; documents are loaded on every request.
    #[must_use]
    pub fn build(self) -> JsonFileStore {
        JsonFileStore::new(self.entries_path(), self.devices_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn should_place_documents_under_storage_dir() {
        let config = Config {
            config_dir: PathBuf::from("/config"),
        };
        assert_eq!(
            config.entries_path(),
            Path::new("/config/.storage/core.config_entries")
        );
        assert_eq!(
            config.devices_path(),
            Path::new("/config/.storage/core.device_registry")
        );
    }

    #[test]
    fn should_build_store_with_configured_paths() {
        let store = Config {
            config_dir: PathBuf::from("/srv/ha"),
        }
        .build();
        assert_eq!(
            store.entries_path(),
            Path::new("/srv/ha/.storage/core.config_entries")
        );
    }
}
