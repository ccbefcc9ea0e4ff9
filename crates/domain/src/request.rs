//! Bulk update request — the per-entry actions an operator asked for.

use std::collections::{HashMap, HashSet};

/// Actions requested for a subset of entries in a single pass.
///
/// Lives for one request/response cycle only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkUpdateRequest {
    sync_address: HashSet<String>,
    update_title: HashSet<String>,
    manual_ids: HashMap<String, String>,
}

impl BulkUpdateRequest {
    /// Create a builder for constructing a [`BulkUpdateRequest`].
    #[must_use]
    pub fn builder() -> BulkUpdateRequestBuilder {
        BulkUpdateRequestBuilder::default()
    }

    #[must_use]
    pub fn wants_address_sync(&self, entry_id: &str) -> bool {
        self.sync_address.contains(entry_id)
    }

    #[must_use]
    pub fn wants_title_update(&self, entry_id: &str) -> bool {
        self.update_title.contains(entry_id)
    }

    /// Manual identifier typed for `entry_id`. Empty input reads as absent.
    #[must_use]
    pub fn manual_id(&self, entry_id: &str) -> Option<&str> {
        self.manual_ids
            .get(entry_id)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn sync_address_count(&self) -> usize {
        self.sync_address.len()
    }

    #[must_use]
    pub fn update_title_count(&self) -> usize {
        self.update_title.len()
    }
}

/// Step-by-step builder for [`BulkUpdateRequest`].
#[derive(Debug, Default)]
pub struct BulkUpdateRequestBuilder {
    inner: BulkUpdateRequest,
}

impl BulkUpdateRequestBuilder {
    #[must_use]
    pub fn sync_address(mut self, entry_id: impl Into<String>) -> Self {
        self.inner.sync_address.insert(entry_id.into());
        self
    }

    #[must_use]
    pub fn update_title(mut self, entry_id: impl Into<String>) -> Self {
        self.inner.update_title.insert(entry_id.into());
        self
    }

    /// Record a manual identifier. The first value for an entry is kept.
    #[must_use]
    pub fn manual_id(mut self, entry_id: impl Into<String>, unique_id: impl Into<String>) -> Self {
        self.inner
            .manual_ids
            .entry(entry_id.into())
            .or_insert_with(|| unique_id.into());
        self
    }

    #[must_use]
    pub fn build(self) -> BulkUpdateRequest {
        self.inner
    }
}
