//! Diagnostic Aggregator
//!
//! Combines the four classifications for each row into a `DiagnosticRecord`.
//! Records are derived on demand and never stored. A missing input marks
//! only its own dimension `Unknown`; the rest of the record and the rest of
//! the batch are still computed.

use super::classify::{
    classify_external, classify_fiscal, classify_inflation, classify_monetary, ClassifyError,
    ClassifyResult, ExternalPosition, FiscalPosition, InflationRegime, MonetaryStance,
    RegimeLabel,
};
use crate::select::rows_for_year;
use crate::table::{Indicator, IndicatorRow, IndicatorTable};
use serde::{Serialize, Serializer};

/// Text shown for a dimension that could not be classified
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Outcome of one classification dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment<L> {
    Classified(L),
    Unknown(ClassifyError),
}

impl<L: RegimeLabel> Assessment<L> {
    /// The label, if the dimension was classified
    pub fn label(&self) -> Option<L> {
        match self {
            Assessment::Classified(label) => Some(*label),
            Assessment::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Assessment::Unknown(_))
    }

    /// Indicator whose absence made this dimension unknown
    pub fn missing_indicator(&self) -> Option<Indicator> {
        match self {
            Assessment::Classified(_) => None,
            Assessment::Unknown(ClassifyError::MissingValue { indicator }) => Some(*indicator),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Assessment::Classified(label) => label.name(),
            Assessment::Unknown(_) => UNKNOWN_LABEL,
        }
    }
}

impl<L> From<ClassifyResult<L>> for Assessment<L> {
    fn from(result: ClassifyResult<L>) -> Self {
        match result {
            Ok(label) => Assessment::Classified(label),
            Err(err) => Assessment::Unknown(err),
        }
    }
}

impl<L: RegimeLabel> std::fmt::Display for Assessment<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl<L: RegimeLabel> Serialize for Assessment<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Regime diagnostics for one (Country, Year)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticRecord {
    pub country: String,
    pub year: i32,
    pub inflation_regime: Assessment<InflationRegime>,
    pub monetary_stance: Assessment<MonetaryStance>,
    pub fiscal_position: Assessment<FiscalPosition>,
    pub external_position: Assessment<ExternalPosition>,
}

impl DiagnosticRecord {
    /// Classify every dimension of a single row
    pub fn from_row(row: &IndicatorRow) -> Self {
        Self {
            country: row.country.clone(),
            year: row.year,
            inflation_regime: classify_inflation(row.inflation).into(),
            monetary_stance: classify_monetary(row.policy_rate, row.inflation).into(),
            fiscal_position: classify_fiscal(row.fiscal_balance).into(),
            external_position: classify_external(row.current_account).into(),
        }
    }

    /// True when every dimension was classified
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Indicators that left a dimension unknown, in dimension order
    pub fn missing(&self) -> Vec<Indicator> {
        [
            self.inflation_regime.missing_indicator(),
            self.monetary_stance.missing_indicator(),
            self.fiscal_position.missing_indicator(),
            self.external_position.missing_indicator(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Markdown block describing this record
    pub fn summary(&self) -> String {
        format!(
            "### {} ({})\n\
             - Inflation Regime: **{}**\n\
             - Monetary Stance: **{}**\n\
             - Fiscal Position: **{}**\n\
             - External Position: **{}**\n",
            self.country,
            self.year,
            self.inflation_regime,
            self.monetary_stance,
            self.fiscal_position,
            self.external_position,
        )
    }
}

/// Classify each row independently, preserving input order and count
pub fn build_diagnostics<'a, I>(rows: I) -> Vec<DiagnosticRecord>
where
    I: IntoIterator<Item = &'a IndicatorRow>,
{
    let records: Vec<DiagnosticRecord> = rows.into_iter().map(DiagnosticRecord::from_row).collect();

    let incomplete = records.iter().filter(|r| !r.is_complete()).count();
    tracing::debug!(records = records.len(), incomplete, "Built diagnostics");

    records
}

/// Regime classification table for every country observed in `year`
pub fn regime_table(table: &IndicatorTable, year: i32) -> Vec<DiagnosticRecord> {
    build_diagnostics(rows_for_year(table, year))
}

/// Join record summaries with horizontal rules
pub fn render_summary(records: &[DiagnosticRecord]) -> String {
    records
        .iter()
        .map(DiagnosticRecord::summary)
        .collect::<Vec<_>>()
        .join("\n---\n\n")
}

/// How many records carry a given label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: &'static str,
    pub count: usize,
}

/// Label distribution per dimension across a set of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeCounts {
    pub inflation_regime: Vec<LabelCount>,
    pub monetary_stance: Vec<LabelCount>,
    pub fiscal_position: Vec<LabelCount>,
    pub external_position: Vec<LabelCount>,
}

impl RegimeCounts {
    /// Count labels, listing every label (and `Unknown`) even at zero
    pub fn tally(records: &[DiagnosticRecord]) -> Self {
        Self {
            inflation_regime: count_labels(records.iter().map(|r| r.inflation_regime)),
            monetary_stance: count_labels(records.iter().map(|r| r.monetary_stance)),
            fiscal_position: count_labels(records.iter().map(|r| r.fiscal_position)),
            external_position: count_labels(records.iter().map(|r| r.external_position)),
        }
    }
}

fn count_labels<L, I>(assessments: I) -> Vec<LabelCount>
where
    L: RegimeLabel,
    I: Iterator<Item = Assessment<L>>,
{
    let mut counts: Vec<LabelCount> = L::all()
        .iter()
        .map(|l| LabelCount {
            label: l.name(),
            count: 0,
        })
        .chain(std::iter::once(LabelCount {
            label: UNKNOWN_LABEL,
            count: 0,
        }))
        .collect();

    for assessment in assessments {
        let name = assessment.name();
        if let Some(entry) = counts.iter_mut().find(|c| c.label == name) {
            entry.count += 1;
        }
    }

    counts
}
