//! Regime Routes
//!
//! - GET /api/v1/regimes - Regime classification table for one year
//! - GET /api/v1/regimes/summary - Markdown diagnostic summary for one year

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{RegimeParams, RegimeResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::regime::{regime_table, render_summary, RegimeCounts};

/// GET /api/v1/regimes?year=2022
///
/// `year` defaults to the latest year in the table. Rows with missing
/// inputs are still listed, with `Unknown` in the affected dimensions.
pub async fn regimes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegimeParams>,
) -> ApiResult<Json<RegimeResponse>> {
    let year = resolve_year(&state, params.year)?;
    let records = regime_table(&state.table, year);

    let incomplete = records.iter().filter(|r| !r.is_complete()).count();
    if incomplete > 0 {
        tracing::debug!(year, incomplete, "Regime table has unknown dimensions");
    }

    Ok(Json(RegimeResponse {
        year,
        counts: RegimeCounts::tally(&records),
        records,
        incomplete,
    }))
}

/// GET /api/v1/regimes/summary?year=2022
pub async fn summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegimeParams>,
) -> ApiResult<Response> {
    let year = resolve_year(&state, params.year)?;
    let records = regime_table(&state.table, year);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        render_summary(&records),
    )
        .into_response())
}

fn resolve_year(state: &AppState, year: Option<i32>) -> ApiResult<i32> {
    state
        .year_or_latest(year)
        .ok_or_else(|| ApiError::NotFound("Indicator table is empty".to_string()))
}
