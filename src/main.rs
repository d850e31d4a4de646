//! Macrodash API Server
//!
//! Run with: cargo run --bin macrodash
//!
//! # Configuration
//!
//! Read from `$MACRODASH_CONFIG`, `<config dir>/macrodash/config.toml`, or
//! `./macrodash.toml`, then overridden by environment variables:
//! - `MACRODASH_DATA_PATH`: Indicator table CSV (default: data/cleaned/macro_clean.csv)
//! - `MACRODASH_HOST`: Host to bind to (default: 127.0.0.1)
//! - `MACRODASH_PORT`: Port to listen on (default: 8501)
//! - `MACRODASH_LOG_LEVEL`, `MACRODASH_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter override

use anyhow::Context;
use macrodash::api::{serve, AppState};
use macrodash::config::Config;
use macrodash::logging;
use macrodash::table::IndicatorTable;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    logging::init(&config.logging);

    tracing::info!("Starting Macrodash v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Indicator table: {:?}", config.data.path);

    // Load once; every request reads this same table
    let table = match IndicatorTable::load(&config.data.path) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load indicator table");
            return Err(e).with_context(|| {
                format!(
                    "cannot start dashboard: indicator table {} failed to load",
                    config.data.path.display()
                )
            });
        }
    };

    if table.is_empty() {
        tracing::warn!("Indicator table has no rows; views will be empty");
    }

    let state = AppState::new(Arc::clone(&table), config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await.context("API server failed")?;

    tracing::info!("Macrodash stopped");
    Ok(())
}
