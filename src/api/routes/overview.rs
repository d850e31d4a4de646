//! Overview Route
//!
//! - GET /api/v1/overview - Countries, year span, and selectable indicators

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{IndicatorDto, OverviewResponse};
use crate::api::state::AppState;
use crate::table::Indicator;

/// GET /api/v1/overview
pub async fn overview(State(state): State<Arc<AppState>>) -> Json<OverviewResponse> {
    let table = &state.table;
    let span = table.year_span();
    let fx = table.fx_measure();

    Json(OverviewResponse {
        countries: table.countries(),
        first_year: span.map(|(first, _)| first),
        last_year: span.map(|(_, last)| last),
        row_count: table.len(),
        fx_measure: fx,
        comparable_indicators: Indicator::comparable()
            .iter()
            .map(|&i| IndicatorDto::new(i, fx))
            .collect(),
        heatmap_indicators: Indicator::heatmap()
            .iter()
            .map(|&i| IndicatorDto::new(i, fx))
            .collect(),
    })
}
