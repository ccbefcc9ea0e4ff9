//! # uidpatch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** adapters must implement:
//!   - `ConfigStore` — load the entries and devices documents, back up and
//!     persist the entries document
//! - Define the **driving** use-cases:
//!   - `EntryService` — list entries with their detected hardware address
//!   - `BulkUpdateService` — read → merge → persist one bulk update
//!
//! ## Concurrency
//! A bulk update runs end to end without any lock. Two overlapping updates
//! may interleave their reads, backups and writes; the last writer wins.
//!
//! ## Dependency rule
//! Depends on `uidpatch-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
