//! Regime classification and diagnostics
//!
//! - **classify**: Threshold rules for inflation, monetary, fiscal, and
//!   external regimes
//! - **diagnostics**: Per-row diagnostic records, summaries, and label tallies
//!
//! # Example
//!
//! ```rust
//! use macrodash::regime::{build_diagnostics, Assessment, InflationRegime};
//! use macrodash::table::{Indicator, IndicatorRow};
//!
//! let rows = vec![IndicatorRow::new("Chile", 2022).with(Indicator::Inflation, 11.6)];
//! let records = build_diagnostics(&rows);
//!
//! assert_eq!(records[0].inflation_regime, Assessment::Classified(InflationRegime::High));
//! assert!(records[0].fiscal_position.is_unknown());
//! ```

pub mod classify;
pub mod diagnostics;

pub use classify::{
    classify_external, classify_fiscal, classify_inflation, classify_monetary, real_rate,
    ClassifyError, ClassifyResult, ExternalPosition, FiscalPosition, InflationRegime,
    MonetaryStance, RegimeLabel,
};
pub use diagnostics::{
    build_diagnostics, regime_table, render_summary, Assessment, DiagnosticRecord, LabelCount,
    RegimeCounts, UNKNOWN_LABEL,
};
