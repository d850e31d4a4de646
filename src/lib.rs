//! # Macrodash
//!
//! Country Macro Dashboard - loads a cleaned table of country-level
//! macroeconomic indicators and serves the views a dashboard needs.
//!
//! ## Features
//!
//! - **Validated loading**: Schema checked up front, missing cells kept as missing
//! - **Views**: Country panels, multi-country comparisons, heatmap slices
//! - **Regime diagnostics**: Inflation, monetary, fiscal, and external regimes
//! - **Dashboard API**: JSON endpoints for the browser front end
//!
//! ## Modules
//!
//! - [`table`]: The immutable indicator table and its CSV loader
//! - [`select`]: Row filters and chart-ready views
//! - [`regime`]: Classification rules and diagnostic records
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use macrodash::regime::{regime_table, render_summary};
//! use macrodash::select::rows_for_country;
//! use macrodash::table::IndicatorTable;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load once; the table is read-only from here on
//!     let table = IndicatorTable::load("data/cleaned/macro_clean.csv")?;
//!
//!     // Country view
//!     let rows = rows_for_country(&table, "Brazil");
//!     println!("Brazil has {} observations", rows.len());
//!
//!     // Regime diagnostics for the latest year
//!     if let Some(year) = table.latest_year() {
//!         println!("{}", render_summary(&regime_table(&table, year)));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod regime;
pub mod select;
pub mod table;

// Re-export top-level types for convenience
pub use table::{
    FxMeasure, Indicator, IndicatorRow, IndicatorTable, Section, TableError, TableResult,
};

pub use select::{rows_for_countries, rows_for_country, rows_for_year};

pub use regime::{
    build_diagnostics, classify_external, classify_fiscal, classify_inflation, classify_monetary,
    Assessment, ClassifyError, DiagnosticRecord, ExternalPosition, FiscalPosition,
    InflationRegime, MonetaryStance,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DataConfig, LoggingConfig};
