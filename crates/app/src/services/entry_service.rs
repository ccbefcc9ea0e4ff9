//! Entry service — use-cases for browsing config entries.

use uidpatch_domain::device::resolve_address;
use uidpatch_domain::entry::ConfigEntry;
use uidpatch_domain::error::{DocumentKind, PatchError, UnavailableError};

use crate::ports::ConfigStore;

/// A config entry together with the hardware address found for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListing {
    pub entry: ConfigEntry,
    pub detected_mac: Option<String>,
}

/// Application service for listing config entries.
pub struct EntryService<S> {
    store: S,
}

impl<S: ConfigStore> EntryService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List every entry with its detected MAC address, sorted by domain.
    ///
    /// Entries sharing a domain keep their document order. A missing device
    /// registry only disables address detection.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::Unavailable`] when the entries document does not
    /// exist, or a malformed/storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn list_entries(&self) -> Result<Vec<EntryListing>, PatchError> {
        let entries = self
            .store
            .load_entries()
            .await?
            .ok_or(UnavailableError {
                document: DocumentKind::Entries,
            })?;
        let devices = self.store.load_devices().await?;
        if devices.is_none() {
            tracing::warn!("device registry not found, hardware addresses will not be detected");
        }

        let mut listings: Vec<EntryListing> = entries
            .entries()
            .into_iter()
            .map(|entry| {
                let detected_mac =
                    resolve_address(&entry.entry_id, devices.as_ref()).map(str::to_string);
                EntryListing {
                    entry,
                    detected_mac,
                }
            })
            .collect();
        listings.sort_by(|left, right| left.entry.domain.cmp(&right.entry.domain));

        tracing::debug!(count = listings.len(), "listed config entries");
        Ok(listings)
    }
}
