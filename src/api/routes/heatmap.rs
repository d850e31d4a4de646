//! Heatmap Route
//!
//! - GET /api/v1/heatmap - One indicator for every country in one year

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{HeatmapParams, HeatmapResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::parse_indicator;
use crate::api::state::AppState;
use crate::select::{heatmap, HeatmapCell};
use crate::table::Indicator;

/// GET /api/v1/heatmap?indicator=Debt_GDP&year=2022
///
/// `year` defaults to the latest year in the table.
pub async fn heatmap_slice(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HeatmapParams>,
) -> ApiResult<Json<HeatmapResponse>> {
    let indicator = parse_indicator(&params.indicator, Indicator::heatmap(), "heatmap")?;
    let year = state
        .year_or_latest(params.year)
        .ok_or_else(|| ApiError::NotFound("Indicator table is empty".to_string()))?;

    let cells = heatmap(&state.table, indicator, year);
    let (min, max) = value_range(&cells);
    let column = indicator.column_for(state.table.fx_measure());

    Ok(Json(HeatmapResponse {
        indicator: column,
        year,
        title: format!("{} Heatmap ({})", column, year),
        cells,
        min,
        max,
    }))
}

/// Smallest and largest present value
fn value_range(cells: &[HeatmapCell]) -> (Option<f64>, Option<f64>) {
    cells
        .iter()
        .filter_map(|c| c.value)
        .fold((None, None), |(min, max), v| {
            (
                Some(min.map_or(v, |m: f64| m.min(v))),
                Some(max.map_or(v, |m: f64| m.max(v))),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(country: &str, value: Option<f64>) -> HeatmapCell {
        HeatmapCell {
            country: country.to_string(),
            value,
        }
    }

    #[test]
    fn test_value_range_skips_missing() {
        let cells = vec![
            cell("Japan", Some(260.1)),
            cell("Chile", None),
            cell("Peru", Some(33.8)),
        ];
        assert_eq!(value_range(&cells), (Some(33.8), Some(260.1)));
        assert_eq!(value_range(&[cell("Chile", None)]), (None, None));
    }
}
