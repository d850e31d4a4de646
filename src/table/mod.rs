//! Indicator Table
//!
//! The immutable in-memory dataset of country-year macro observations:
//!
//! - **types**: Indicator columns, dashboard sections, and the row record
//! - **dataset**: The `IndicatorTable` itself and its read-only accessors
//! - **loader**: CSV loading with schema validation
//! - **writer**: CSV output in the source schema
//! - **error**: Load-time error types
//!
//! # Lifecycle
//!
//! ```text
//! CSV file → header resolved against schema → rows parsed → table frozen
//!                   │                                          │
//!            SchemaMismatch (fatal)                 shared read-only via Arc
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use macrodash::table::{Indicator, IndicatorTable};
//!
//! let table = IndicatorTable::load("data/cleaned/macro_clean.csv")?;
//! for row in table.rows() {
//!     println!("{} {}: {:?}", row.country, row.year, row.value(Indicator::Inflation));
//! }
//! # Ok::<(), macrodash::table::TableError>(())
//! ```

pub mod dataset;
pub mod error;
pub mod loader;
pub mod types;
pub mod writer;

pub use dataset::IndicatorTable;
pub use error::{TableError, TableResult};
pub use types::{FxMeasure, Indicator, IndicatorRow, Section, UnknownIndicator};
