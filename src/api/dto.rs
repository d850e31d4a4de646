//! Data Transfer Objects
//!
//! Request parameters and response bodies for the dashboard endpoints.
//! Missing indicator values serialize as `null`, never as zero.

use serde::{Deserialize, Serialize};

use crate::regime::{DiagnosticRecord, RegimeCounts};
use crate::select::{CountryPanel, CountrySeries, HeatmapCell};
use crate::table::{FxMeasure, Indicator, IndicatorRow};

// ============================================
// OVERVIEW DTOs
// ============================================

/// Dataset overview: what the selectors can offer
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    /// Sorted country names
    pub countries: Vec<String>,
    /// Earliest observed year
    pub first_year: Option<i32>,
    /// Latest observed year (default year selection)
    pub last_year: Option<i32>,
    /// Number of observations
    pub row_count: usize,
    /// FX measure carried in the FX column
    pub fx_measure: FxMeasure,
    /// Indicators for the comparison selector
    pub comparable_indicators: Vec<IndicatorDto>,
    /// Indicators for the heatmap selector
    pub heatmap_indicators: Vec<IndicatorDto>,
}

/// Indicator descriptor
#[derive(Debug, Serialize)]
pub struct IndicatorDto {
    /// Column name as carried by the table
    pub name: &'static str,
    /// Chart title
    pub title: String,
}

impl IndicatorDto {
    pub fn new(indicator: Indicator, fx_measure: FxMeasure) -> Self {
        Self {
            name: indicator.column_for(fx_measure),
            title: indicator.title_for(fx_measure).to_string(),
        }
    }
}

// ============================================
// COUNTRY DTOs
// ============================================

/// Output format selector shared by the table-returning endpoints
#[derive(Debug, Deserialize)]
pub struct FormatParams {
    /// Format: json, csv
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "json".to_string()
}

/// Country view response
#[derive(Debug, Serialize)]
pub struct CountryResponse {
    /// Charts grouped by section
    pub panel: CountryPanel,
    /// Underlying rows, in year order
    pub rows: Vec<IndicatorRow>,
}

// ============================================
// COMPARE DTOs
// ============================================

/// Compare query parameters
#[derive(Debug, Deserialize)]
pub struct CompareParams {
    /// Indicator column name
    pub indicator: String,
    /// Comma-separated country names (default: first four)
    #[serde(default)]
    pub countries: Option<String>,
    /// Format: json, chart
    #[serde(default = "default_format")]
    pub format: String,
}

/// Compare response (JSON format)
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    /// Column name as carried by the table
    pub indicator: &'static str,
    pub title: String,
    /// Countries actually selected
    pub countries: Vec<String>,
    pub series: Vec<CountrySeries>,
    /// Underlying rows, in table order
    pub rows: Vec<IndicatorRow>,
}

/// Chart-formatted response
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    /// Chart title
    pub title: String,
    /// Labels for x-axis (years)
    pub labels: Vec<i32>,
    /// Data series
    pub datasets: Vec<ChartDataset>,
}

/// Single dataset for chart
#[derive(Debug, Serialize)]
pub struct ChartDataset {
    /// Dataset label
    pub label: String,
    /// Data values aligned with labels; gaps are null
    pub data: Vec<Option<f64>>,
    /// Suggested color
    pub color: String,
}

// ============================================
// HEATMAP DTOs
// ============================================

/// Heatmap query parameters
#[derive(Debug, Deserialize)]
pub struct HeatmapParams {
    /// Indicator column name
    pub indicator: String,
    /// Year (default: latest)
    #[serde(default)]
    pub year: Option<i32>,
}

/// Heatmap response
#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    /// Column name as carried by the table
    pub indicator: &'static str,
    pub year: i32,
    pub title: String,
    pub cells: Vec<HeatmapCell>,
    /// Smallest present value, for the color scale
    pub min: Option<f64>,
    /// Largest present value, for the color scale
    pub max: Option<f64>,
}

// ============================================
// REGIME DTOs
// ============================================

/// Regime query parameters
#[derive(Debug, Deserialize)]
pub struct RegimeParams {
    /// Year (default: latest)
    #[serde(default)]
    pub year: Option<i32>,
}

/// Regime classification response
#[derive(Debug, Serialize)]
pub struct RegimeResponse {
    pub year: i32,
    pub records: Vec<DiagnosticRecord>,
    pub counts: RegimeCounts,
    /// Records with at least one unknown dimension
    pub incomplete: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Indicator table status: ok, empty
    pub table: String,
    /// File the table was loaded from
    pub source: Option<String>,
    /// Number of loaded observations
    pub rows: usize,
    /// Number of distinct countries
    pub countries: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
