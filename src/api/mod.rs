//! Dashboard REST API
//!
//! HTTP API layer serving the dashboard views, built with Axum.
//!
//! # Endpoints
//!
//! ## Overview
//! - `GET /api/v1/overview` - Countries, year span, selectable indicators
//!
//! ## Country view
//! - `GET /api/v1/countries/:country` - All indicators for one country
//! - `GET /api/v1/countries/:country/series/:indicator` - One chart
//!
//! ## Compare view
//! - `GET /api/v1/compare` - One indicator across selected countries
//!
//! ## Analytics view
//! - `GET /api/v1/heatmap` - One indicator, one year, every country
//! - `GET /api/v1/regimes` - Regime classification table
//! - `GET /api/v1/regimes/summary` - Markdown diagnostic summary
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use macrodash::api::{serve, AppState};
//! use macrodash::config::ApiConfig;
//! use macrodash::table::IndicatorTable;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = Arc::new(IndicatorTable::load("data/cleaned/macro_clean.csv")?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(table, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/overview", get(routes::overview::overview))
        // Country view
        .route("/countries/:country", get(routes::countries::country_view))
        .route(
            "/countries/:country/series/:indicator",
            get(routes::countries::country_series),
        )
        // Compare view
        .route("/compare", get(routes::compare::compare_countries))
        // Analytics view
        .route("/heatmap", get(routes::heatmap::heatmap_slice))
        .route("/regimes", get(routes::regimes::regimes))
        .route("/regimes/summary", get(routes::regimes::summary));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Macrodash API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Macrodash API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::IndicatorTable;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    const DATA: &str = "Year,Country,GDP_Growth,Inflation,Unemployment,Policy_Rate,Debt_GDP,Fiscal_Balance,Current_Account,FX_Dep_YoY,TenY_Yield,Equity_YoY
2021,Brazil,4.8,8.3,13.2,9.25,88.9,-4.4,-2.8,7.4,10.8,-11.9
2022,Brazil,2.9,9.3,9.3,13.75,85.9,-4.6,-2.8,-4.9,12.7,4.7
2021,Japan,2.6,-0.2,2.8,-0.1,255.4,-6.1,3.9,3.6,0.1,4.9
2022,Japan,1.0,2.5,2.6,-0.1,260.1,,2.1,19.7,0.4,-9.4
2022,Turkey,5.5,72.3,10.4,9.0,31.7,-0.9,-5.4,79.3,10.9,196.6";

    fn create_test_app() -> Router {
        let table = IndicatorTable::from_reader(DATA.as_bytes()).unwrap();
        let state = AppState::new(Arc::new(table), ApiConfig::default());
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let (status, _) = get_json(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get_json(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get_json(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["table"], "ok");
        assert_eq!(body["source"], serde_json::Value::Null);
        assert_eq!(body["rows"], 5);
        assert_eq!(body["countries"], 3);
    }

    #[tokio::test]
    async fn test_ready_with_empty_table() {
        let state = AppState::new(Arc::new(IndicatorTable::default()), ApiConfig::default());
        let (status, _) = get_json(build_router(state), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_overview() {
        let (status, body) = get_json(create_test_app(), "/api/v1/overview").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["countries"], serde_json::json!(["Brazil", "Japan", "Turkey"]));
        assert_eq!(body["first_year"], 2021);
        assert_eq!(body["last_year"], 2022);
        assert_eq!(body["fx_measure"], "depreciation_yoy");
        assert_eq!(body["comparable_indicators"].as_array().unwrap().len(), 9);
        assert_eq!(body["heatmap_indicators"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_health_reports_source_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("macro_clean.csv");
        std::fs::write(&path, DATA).unwrap();

        let table = IndicatorTable::load(&path).unwrap();
        let state = AppState::new(Arc::new(table), ApiConfig::default());
        let (status, body) = get_json(build_router(state), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], path.display().to_string());
    }

    #[tokio::test]
    async fn test_fx_rate_table_names_fx_rate() {
        let data = DATA.replacen("FX_Dep_YoY", "FX_Rate", 1);
        let table = IndicatorTable::from_reader(data.as_bytes()).unwrap();
        let state = AppState::new(Arc::new(table), ApiConfig::default());
        let app = build_router(state);

        let (_, body) = get_json(app.clone(), "/api/v1/overview").await;
        assert_eq!(body["fx_measure"], "rate");
        let names: Vec<&str> = body["heatmap_indicators"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|i| i["name"].as_str())
            .collect();
        assert!(names.contains(&"FX_Rate"));
        assert!(!names.contains(&"FX_Dep_YoY"));

        let (_, body) = get_json(app.clone(), "/api/v1/countries/Japan").await;
        let fx_chart = body["panel"]["sections"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|s| s["charts"].as_array().unwrap().iter())
            .find(|c| c["indicator"] == "FX_Rate")
            .cloned()
            .unwrap();
        assert_eq!(fx_chart["title"], "FX Rate");

        let (status, body) = get_json(app.clone(), "/api/v1/heatmap?indicator=FX_Rate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["indicator"], "FX_Rate");
        assert_eq!(body["title"], "FX_Rate Heatmap (2022)");

        let (_, body) = get_json(app, "/api/v1/countries/Japan/series/FX_Rate").await;
        assert_eq!(body["indicator"], "FX_Rate");
        assert_eq!(body["title"], "FX Rate");
    }

    #[tokio::test]
    async fn test_country_view() {
        let (status, body) = get_json(create_test_app(), "/api/v1/countries/Japan").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"].as_array().unwrap().len(), 2);
        assert_eq!(body["rows"][1]["Fiscal_Balance"], serde_json::Value::Null);
        assert_eq!(body["panel"]["sections"][0]["heading"], "Japan: Real Economy");
    }

    #[tokio::test]
    async fn test_unknown_country_is_empty_not_error() {
        let (status, body) = get_json(create_test_app(), "/api/v1/countries/Nonexistent").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["rows"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_country_csv() {
        let (status, text) = get_text(create_test_app(), "/api/v1/countries/Brazil?format=csv").await;

        assert_eq!(status, StatusCode::OK);
        assert!(text.starts_with("Year,Country,GDP_Growth"));
        assert_eq!(text.lines().count(), 3);
    }

    #[tokio::test]
    async fn test_country_series() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/countries/Brazil/series/policy_rate").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Policy Rate (%)");
        assert_eq!(body["points"][1]["value"], 13.75);

        let (status, _) = get_json(create_test_app(), "/api/v1/countries/Brazil/series/gold").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compare_default_selection() {
        let (status, body) = get_json(create_test_app(), "/api/v1/compare?indicator=Inflation").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["countries"], serde_json::json!(["Brazil", "Japan", "Turkey"]));
        assert_eq!(body["series"].as_array().unwrap().len(), 3);
        assert_eq!(body["rows"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_compare_chart() {
        let (status, body) = get_json(
            create_test_app(),
            "/api/v1/compare?indicator=GDP_Growth&countries=Turkey,Brazil&format=chart",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["labels"], serde_json::json!([2021, 2022]));
        assert_eq!(body["datasets"][0]["label"], "Brazil");
        assert_eq!(body["datasets"][1]["data"], serde_json::json!([null, 5.5]));
    }

    #[tokio::test]
    async fn test_compare_rejects_unemployment() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/compare?indicator=Unemployment").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_heatmap_defaults_to_latest_year() {
        let (status, body) = get_json(create_test_app(), "/api/v1/heatmap?indicator=Debt_GDP").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["year"], 2022);
        assert_eq!(body["cells"].as_array().unwrap().len(), 3);
        assert_eq!(body["max"], 260.1);
        assert_eq!(body["title"], "Debt_GDP Heatmap (2022)");
    }

    #[tokio::test]
    async fn test_heatmap_rejects_equity() {
        let (status, _) = get_json(create_test_app(), "/api/v1/heatmap?indicator=Equity_YoY").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_regimes_with_missing_value() {
        let (status, body) = get_json(create_test_app(), "/api/v1/regimes?year=2022").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["incomplete"], 1);

        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 3);

        let japan = &records[1];
        assert_eq!(japan["country"], "Japan");
        assert_eq!(japan["fiscal_position"], "Unknown");
        assert_eq!(japan["inflation_regime"], "Low");
        assert_eq!(japan["monetary_stance"], "Loose");
        assert_eq!(japan["external_position"], "Surplus");

        let turkey = &records[2];
        assert_eq!(turkey["inflation_regime"], "Extreme");
        assert_eq!(turkey["monetary_stance"], "Loose");
        assert_eq!(turkey["external_position"], "Deficit");
    }

    #[tokio::test]
    async fn test_regime_summary() {
        let (status, text) = get_text(create_test_app(), "/api/v1/regimes/summary?year=2021").await;

        assert_eq!(status, StatusCode::OK);
        assert!(text.starts_with("### Brazil (2021)"));
        assert!(text.contains("- Inflation Regime: **High**"));
        assert!(text.contains("### Japan (2021)"));
    }

    #[tokio::test]
    async fn test_regimes_empty_table() {
        let state = AppState::new(Arc::new(IndicatorTable::default()), ApiConfig::default());
        let (status, body) = get_json(build_router(state), "/api/v1/regimes").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
