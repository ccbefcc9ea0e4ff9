//! # uidpatchd — uidpatch daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the tracing subscriber
//! - Construct the JSON file store (adapter)
//! - Construct application services, injecting the store via the port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use uidpatch_adapter_http_axum::state::AppState;
use uidpatch_app::services::bulk_update_service::BulkUpdateService;
use uidpatch_app::services::entry_service::EntryService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Storage
    let store = config.store_config().build();
    if config.storage.config_dir.is_dir() {
        tracing::info!(
            config_dir = %config.storage.config_dir.display(),
            entries = %store.entries_path().display(),
            "configuration directory found"
        );
    } else {
        tracing::warn!(
            config_dir = %config.storage.config_dir.display(),
            "configuration directory does not exist, pages will report missing documents"
        );
    }

    // Services
    let entry_service = EntryService::new(store.clone());
    let bulk_update_service = BulkUpdateService::new(store);

    // HTTP
    let state = AppState::new(entry_service, bulk_update_service);
    let app = uidpatch_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "uidpatchd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("uidpatchd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
