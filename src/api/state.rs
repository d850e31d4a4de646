//! Application State
//!
//! Shared state accessible by all API handlers.
//! The indicator table is loaded before the server starts and only read
//! afterwards, so handlers share it without locking.

use crate::config::ApiConfig;
use crate::table::IndicatorTable;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable indicator table
    pub table: Arc<IndicatorTable>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around a loaded table
    pub fn new(table: Arc<IndicatorTable>, config: ApiConfig) -> Self {
        Self {
            table,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Resolve an optional year selection to the latest year in the table
    pub fn year_or_latest(&self, year: Option<i32>) -> Option<i32> {
        year.or_else(|| self.table.latest_year())
    }
}
