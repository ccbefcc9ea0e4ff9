//! # uidpatch-domain
//!
//! Pure domain model for editing the `unique_id` of config entries stored in a
//! home-automation platform's `.storage` directory.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, backup naming
//! - Wrap the **entries document** (`core.config_entries`) without losing
//!   unrelated keys or key order
//! - Model the read-only **device registry** (`core.device_registry`) and
//!   resolve the MAC address linked to an entry
//! - Describe a **bulk update request** and merge it into the entries document
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod device;
pub mod entry;
pub mod merge;
pub mod request;
