//! # uidpatch-adapter-storage-json
//!
//! Filesystem persistence adapter for the platform's `.storage` directory.
//!
//! ## Responsibilities
//! - Implement the `ConfigStore` port defined in `uidpatch-app::ports::storage`
//! - Read `core.config_entries` and `core.device_registry`, reporting a
//!   missing file as *absent* and invalid JSON as *malformed*
//! - Copy the live entries file to `<path>.bak_<YYYYMMDD_HHMMSS>` before
//!   every write, then overwrite it with 4-space indented JSON
//!
//! ## Concurrency
//! No file locking is performed. The adapter assumes a single operator and a
//! single process; concurrent writers race and the last one wins.
//!
//! ## Dependency rule
//! Depends on `uidpatch-app` (for port traits) and `uidpatch-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod config;
pub mod error;
pub mod file;
pub mod store;

pub use config::Config;
pub use error::StorageError;
pub use store::JsonFileStore;
