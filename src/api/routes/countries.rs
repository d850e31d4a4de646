//! Country Routes
//!
//! - GET /api/v1/countries/:country - Country view (all indicators)
//! - GET /api/v1/countries/:country/series/:indicator - Single chart

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CountryResponse, FormatParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::parse_indicator;
use crate::api::state::AppState;
use crate::select::{country_panel, rows_for_country, series, IndicatorSeries};
use crate::table::{writer, Indicator};

/// GET /api/v1/countries/:country
///
/// An unknown country is not an error: the panel and rows are empty.
pub async fn country_view(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
    Query(params): Query<FormatParams>,
) -> ApiResult<Response> {
    let rows = rows_for_country(&state.table, &country);
    tracing::debug!(country = %country, rows = rows.len(), "Country view");

    match params.format.to_lowercase().as_str() {
        "csv" => {
            let body = writer::rows_to_string(rows, state.table.fx_measure())?;
            Ok((StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], body).into_response())
        }
        "json" => {
            let response = CountryResponse {
                panel: country_panel(&state.table, &country),
                rows: rows.into_iter().cloned().collect(),
            };
            Ok((StatusCode::OK, Json(response)).into_response())
        }
        other => Err(ApiError::Validation(format!(
            "Invalid format: {}. Use json or csv",
            other
        ))),
    }
}

/// GET /api/v1/countries/:country/series/:indicator
pub async fn country_series(
    State(state): State<Arc<AppState>>,
    Path((country, indicator)): Path<(String, String)>,
) -> ApiResult<Json<IndicatorSeries>> {
    let indicator = parse_indicator(&indicator, Indicator::all(), "country")?;
    let rows = rows_for_country(&state.table, &country);

    Ok(Json(IndicatorSeries::new(
        indicator,
        state.table.fx_measure(),
        series(&rows, indicator),
    )))
}
