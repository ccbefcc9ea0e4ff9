//! Bulk update service — read, merge and persist one bulk update.

use std::path::PathBuf;

use uidpatch_domain::entry::ConfigEntry;
use uidpatch_domain::error::{DocumentKind, PatchError, UnavailableError};
use uidpatch_domain::merge::{EntryChange, IdentifierRule, merge_bulk_update};
use uidpatch_domain::request::BulkUpdateRequest;

use crate::ports::ConfigStore;

/// Result of a bulk update that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkUpdateOutcome {
    /// Nothing differed from the stored document; nothing was written.
    NoChanges,
    /// At least one entry changed and the document was saved.
    Saved {
        changed_count: usize,
        /// Every entry of the saved document, in document order.
        entries: Vec<ConfigEntry>,
        /// Copy of the document as it was before the write.
        backup: PathBuf,
    },
}

impl BulkUpdateOutcome {
    #[must_use]
    pub fn changed_count(&self) -> usize {
        match self {
            Self::NoChanges => 0,
            Self::Saved { changed_count, .. } => *changed_count,
        }
    }
}

/// Application service applying [`BulkUpdateRequest`]s to the entries store.
pub struct BulkUpdateService<S> {
    store: S,
}

impl<S: ConfigStore> BulkUpdateService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load both documents, merge `request` and persist when anything changed.
    ///
    /// The store is only asked to persist when at least one entry changed, so
    /// a no-op request never creates a backup file.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::Unavailable`] when the entries document does not
    /// exist, [`PatchError::Malformed`] when a document cannot be parsed, or a
    /// storage error when the backup or the write fails. In every error case
    /// the live document has not been replaced.
    #[tracing::instrument(skip_all)]
    pub async fn bulk_update(
        &self,
        request: &BulkUpdateRequest,
    ) -> Result<BulkUpdateOutcome, PatchError> {
        let mut entries = self
            .store
            .load_entries()
            .await?
            .ok_or(UnavailableError {
                document: DocumentKind::Entries,
            })?;
        let devices = self.store.load_devices().await?;

        tracing::info!(
            sync_address = request.sync_address_count(),
            update_title = request.update_title_count(),
            "bulk update requested"
        );

        let report = merge_bulk_update(&mut entries, devices.as_ref(), request);
        report.changes().iter().for_each(log_change);

        if report.is_empty() {
            tracing::info!("no changes detected");
            return Ok(BulkUpdateOutcome::NoChanges);
        }

        let backup = self.store.persist_entries(&entries).await?;
        tracing::info!(
            changed = report.changed_count(),
            backup = %backup.display(),
            "saved changes"
        );

        Ok(BulkUpdateOutcome::Saved {
            changed_count: report.changed_count(),
            entries: entries.entries(),
            backup,
        })
    }
}

fn log_change(change: &EntryChange) {
    let unique_id = change.unique_id.as_deref().unwrap_or_default();
    match change.rule {
        Some(IdentifierRule::AddressSync) => {
            tracing::info!(entry_id = %change.entry_id, %unique_id, "synced hardware address");
        }
        Some(IdentifierRule::Manual) => {
            tracing::info!(entry_id = %change.entry_id, %unique_id, "applied manual unique id");
        }
        None => {}
    }
    if change.title_changed() {
        tracing::info!(entry_id = %change.entry_id, title = %change.title, "title updated");
    }
}
