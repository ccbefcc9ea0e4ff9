//! Storage port — access to the platform's `.storage` documents.

use std::future::Future;
use std::path::PathBuf;

use uidpatch_domain::device::DevicesDocument;
use uidpatch_domain::entry::EntriesDocument;
use uidpatch_domain::error::PatchError;

/// Reads the entries and devices documents and persists the entries document.
///
/// Implementations never cache: every load re-reads the backing store.
pub trait ConfigStore {
    /// Load the entries document, `None` when it does not exist.
    fn load_entries(
        &self,
    ) -> impl Future<Output = Result<Option<EntriesDocument>, PatchError>> + Send;

    /// Load the device registry, `None` when it does not exist.
    fn load_devices(
        &self,
    ) -> impl Future<Output = Result<Option<DevicesDocument>, PatchError>> + Send;

    /// Copy the live entries document to a timestamped backup, then overwrite
    /// it with `entries`. Returns the backup location.
    fn persist_entries(
        &self,
        entries: &EntriesDocument,
    ) -> impl Future<Output = Result<PathBuf, PatchError>> + Send;
}
