//! # uidpatch-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML editor** that works with **zero
//!   JavaScript**: one listing page holding a single bulk-update form
//! - Map form submissions into a `BulkUpdateRequest` and call the
//!   application services (driving adapter)
//! - Map outcomes into HTML pages, PRG redirects or plain-text errors
//! - Pick the page language (`ja` by default, `en`)
//!
//! ## Dependency rule
//! Depends on `uidpatch-app` (for port traits and services) and `uidpatch-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod dashboard;
pub mod error;
pub mod i18n;
pub mod router;
pub mod state;
