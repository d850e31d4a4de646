//! The immutable indicator table
//!
//! Built once (from a CSV source or from rows in memory) and never mutated
//! afterwards. Consumers share it behind an `Arc` and only read.

use super::error::{TableError, TableResult};
use super::types::{FxMeasure, Indicator, IndicatorRow};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Ordered, immutable sequence of country-year observations
#[derive(Debug, Clone, Default)]
pub struct IndicatorTable {
    rows: Vec<IndicatorRow>,
    fx_measure: FxMeasure,
    source: Option<PathBuf>,
}

impl IndicatorTable {
    /// Build a table from rows already in memory
    ///
    /// Applies the same invariants as a file load: non-empty country names,
    /// finite indicator values, and unique (Country, Year) pairs. Reported line numbers are 1-based
    /// row positions.
    pub fn from_rows(rows: Vec<IndicatorRow>, fx_measure: FxMeasure) -> TableResult<Self> {
        let mut seen = HashSet::with_capacity(rows.len());

        for (idx, row) in rows.iter().enumerate() {
            let line = idx as u64 + 1;
            if row.country.trim().is_empty() {
                return Err(TableError::InvalidValue {
                    line,
                    column: "Country".to_string(),
                    value: row.country.clone(),
                });
            }
            for &indicator in Indicator::all() {
                if let Some(v) = row.value(indicator) {
                    if !v.is_finite() {
                        return Err(TableError::InvalidValue {
                            line,
                            column: indicator.column_for(fx_measure).to_string(),
                            value: v.to_string(),
                        });
                    }
                }
            }
            if !seen.insert((row.country.as_str(), row.year)) {
                return Err(TableError::DuplicateObservation {
                    country: row.country.clone(),
                    year: row.year,
                    line,
                });
            }
        }

        Ok(Self {
            rows,
            fx_measure,
            source: None,
        })
    }

    /// Constructor used by the loader once every row has been validated
    pub(crate) fn from_validated(
        rows: Vec<IndicatorRow>,
        fx_measure: FxMeasure,
        source: Option<PathBuf>,
    ) -> Self {
        Self {
            rows,
            fx_measure,
            source,
        }
    }

    /// All rows in source order
    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Which FX measure the table carries
    pub fn fx_measure(&self) -> FxMeasure {
        self.fx_measure
    }

    /// File the table was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Distinct country names, sorted
    pub fn countries(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Earliest and latest year present
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.rows.iter().map(|r| r.year).min()?;
        let max = self.rows.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Latest year present, the dashboard's default year selection
    pub fn latest_year(&self) -> Option<i32> {
        self.year_span().map(|(_, max)| max)
    }
}
