//! Dashboard views
//!
//! Shapes filtered rows into what the presentation layer charts: per-country
//! indicator panels, multi-country comparison series, and heatmap slices.
//! Missing values travel through as `None` so charts show gaps, not zeros.

use super::filter::{rows_for_countries, rows_for_country, rows_for_year};
use crate::table::{FxMeasure, Indicator, IndicatorRow, IndicatorTable, Section};
use serde::Serialize;

/// Number of countries preselected in the comparison view
pub const DEFAULT_COMPARE_COUNT: usize = 4;

/// One point of a yearly series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: Option<f64>,
}

/// A titled indicator series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSeries {
    #[serde(skip)]
    pub indicator: Indicator,
    /// Column name as carried by the table
    #[serde(rename = "indicator")]
    pub column: &'static str,
    pub title: String,
    pub points: Vec<SeriesPoint>,
}

impl IndicatorSeries {
    /// Label a series with the names used by a table of the given FX measure
    pub fn new(indicator: Indicator, fx_measure: FxMeasure, points: Vec<SeriesPoint>) -> Self {
        Self {
            indicator,
            column: indicator.column_for(fx_measure),
            title: indicator.title_for(fx_measure).to_string(),
            points,
        }
    }
}

/// Charts for one dashboard section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSection {
    pub section: Section,
    pub heading: String,
    pub charts: Vec<IndicatorSeries>,
}

/// Every indicator for a single country, grouped by section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryPanel {
    pub country: String,
    pub sections: Vec<PanelSection>,
}

impl CountryPanel {
    /// True when the country has no rows in the table
    pub fn is_empty(&self) -> bool {
        self.sections
            .iter()
            .all(|s| s.charts.iter().all(|c| c.points.is_empty()))
    }
}

/// One country's line in a comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySeries {
    pub country: String,
    pub points: Vec<SeriesPoint>,
}

/// One cell of a heatmap slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub country: String,
    pub value: Option<f64>,
}

/// Extract a yearly series for one indicator, in row order
pub fn series(rows: &[&IndicatorRow], indicator: Indicator) -> Vec<SeriesPoint> {
    rows.iter()
        .map(|r| SeriesPoint {
            year: r.year,
            value: r.value(indicator),
        })
        .collect()
}

/// Build the country view: every section and indicator for `country`
///
/// An unknown country yields a panel with empty series.
pub fn country_panel(table: &IndicatorTable, country: &str) -> CountryPanel {
    let rows = rows_for_country(table, country);
    let fx_measure = table.fx_measure();

    let sections = Section::all()
        .iter()
        .map(|&section| PanelSection {
            section,
            heading: format!("{}: {}", country, section),
            charts: section
                .indicators()
                .into_iter()
                .map(|indicator| {
                    IndicatorSeries::new(indicator, fx_measure, series(&rows, indicator))
                })
                .collect(),
        })
        .collect();

    CountryPanel {
        country: country.to_string(),
        sections,
    }
}

/// Build the comparison view: one series per selected country
///
/// Countries are returned in sorted order; selected names with no rows are
/// dropped.
pub fn compare<S: AsRef<str>>(
    table: &IndicatorTable,
    indicator: Indicator,
    countries: &[S],
) -> Vec<CountrySeries> {
    let rows = rows_for_countries(table, countries);

    let mut names: Vec<&str> = rows.iter().map(|r| r.country.as_str()).collect();
    names.sort_unstable();
    names.dedup();

    names
        .into_iter()
        .map(|name| {
            let own: Vec<&IndicatorRow> =
                rows.iter().copied().filter(|r| r.country == name).collect();
            CountrySeries {
                country: name.to_string(),
                points: series(&own, indicator),
            }
        })
        .collect()
}

/// The first `n` countries in sorted order
pub fn default_selection(table: &IndicatorTable, n: usize) -> Vec<String> {
    table.countries().into_iter().take(n).collect()
}

/// Heatmap slice: one indicator for every country observed in `year`
pub fn heatmap(table: &IndicatorTable, indicator: Indicator, year: i32) -> Vec<HeatmapCell> {
    rows_for_year(table, year)
        .into_iter()
        .map(|r| HeatmapCell {
            country: r.country.clone(),
            value: r.value(indicator),
        })
        .collect()
}
