//! Shared application state for axum handlers.

use std::sync::Arc;

use uidpatch_app::ports::ConfigStore;
use uidpatch_app::services::bulk_update_service::BulkUpdateService;
use uidpatch_app::services::entry_service::EntryService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone`;
/// only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Entry listing service.
    pub entry_service: Arc<EntryService<S>>,
    /// Bulk update service.
    pub bulk_update_service: Arc<BulkUpdateService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            entry_service: Arc::clone(&self.entry_service),
            bulk_update_service: Arc::clone(&self.bulk_update_service),
        }
    }
}

impl<S> AppState<S>
where
    S: ConfigStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(entry_service: EntryService<S>, bulk_update_service: BulkUpdateService<S>) -> Self {
        Self {
            entry_service: Arc::new(entry_service),
            bulk_update_service: Arc::new(bulk_update_service),
        }
    }
}
