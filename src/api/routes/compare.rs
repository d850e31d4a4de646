//! Compare Route
//!
//! - GET /api/v1/compare - One indicator across a set of countries

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::api::dto::{ChartDataset, ChartResponse, CompareParams, CompareResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::parse_indicator;
use crate::api::state::AppState;
use crate::select::{
    compare, default_selection, rows_for_countries, CountrySeries, DEFAULT_COMPARE_COUNT,
};
use crate::table::Indicator;

/// Color palette for chart series
const COLORS: [&str; 8] = [
    "#4CAF50", "#2196F3", "#FF9800", "#9C27B0", "#F44336", "#00BCD4", "#795548", "#607D8B",
];

/// GET /api/v1/compare?indicator=Inflation&countries=Brazil,Chile
///
/// Without `countries`, the first four countries (sorted) are compared.
pub async fn compare_countries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> ApiResult<Response> {
    let indicator = parse_indicator(&params.indicator, Indicator::comparable(), "compare")?;

    let selected = match params.countries.as_deref() {
        Some(list) => parse_country_list(list),
        None => default_selection(&state.table, DEFAULT_COMPARE_COUNT),
    };

    let lines = compare(&state.table, indicator, &selected);
    let column = indicator.column_for(state.table.fx_measure());
    let title = format!("{} Comparison", column);

    match params.format.to_lowercase().as_str() {
        "chart" => Ok((StatusCode::OK, Json(to_chart(title, &lines))).into_response()),
        "json" => {
            let rows = rows_for_countries(&state.table, &selected)
                .into_iter()
                .cloned()
                .collect();
            let response = CompareResponse {
                indicator: column,
                title,
                countries: selected,
                series: lines,
                rows,
            };
            Ok((StatusCode::OK, Json(response)).into_response())
        }
        other => Err(ApiError::Validation(format!(
            "Invalid format: {}. Use json or chart",
            other
        ))),
    }
}

/// Split a comma-separated country list, dropping blanks
fn parse_country_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Align every country's series on the union of years
fn to_chart(title: String, lines: &[CountrySeries]) -> ChartResponse {
    let labels: Vec<i32> = lines
        .iter()
        .flat_map(|l| l.points.iter().map(|p| p.year))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let datasets = lines
        .iter()
        .enumerate()
        .map(|(i, line)| ChartDataset {
            label: line.country.clone(),
            data: labels
                .iter()
                .map(|year| {
                    line.points
                        .iter()
                        .find(|p| p.year == *year)
                        .and_then(|p| p.value)
                })
                .collect(),
            color: COLORS[i % COLORS.len()].to_string(),
        })
        .collect();

    ChartResponse {
        title,
        labels,
        datasets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::SeriesPoint;

    #[test]
    fn test_parse_country_list() {
        assert_eq!(
            parse_country_list(" Brazil, ,Chile,"),
            vec!["Brazil".to_string(), "Chile".to_string()]
        );
        assert!(parse_country_list("").is_empty());
    }

    #[test]
    fn test_chart_aligns_years_with_gaps() {
        let lines = vec![
            CountrySeries {
                country: "Brazil".to_string(),
                points: vec![
                    SeriesPoint { year: 2021, value: Some(8.3) },
                    SeriesPoint { year: 2022, value: Some(9.3) },
                ],
            },
            CountrySeries {
                country: "Chile".to_string(),
                points: vec![
                    SeriesPoint { year: 2022, value: Some(11.6) },
                    SeriesPoint { year: 2023, value: None },
                ],
            },
        ];

        let chart = to_chart("Inflation Comparison".to_string(), &lines);

        assert_eq!(chart.labels, vec![2021, 2022, 2023]);
        assert_eq!(chart.datasets[0].data, vec![Some(8.3), Some(9.3), None]);
        assert_eq!(chart.datasets[1].data, vec![None, Some(11.6), None]);
        assert_ne!(chart.datasets[0].color, chart.datasets[1].color);
    }
}
