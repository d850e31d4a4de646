//! Filter/Select Layer
//!
//! Pure, side-effect-free projections of the indicator table:
//!
//! - **filter**: Row subsets by country, country set, or year
//! - **views**: Chart-ready shapes built from those subsets
//!
//! Nothing here mutates the table or fails; an empty result is a valid
//! answer to "no rows match".

pub mod filter;
pub mod views;

pub use filter::{rows_for_countries, rows_for_country, rows_for_year};
pub use views::{
    compare, country_panel, default_selection, heatmap, series, CountryPanel, CountrySeries,
    HeatmapCell, IndicatorSeries, PanelSection, SeriesPoint, DEFAULT_COMPARE_COUNT,
};
