//! API Routes
//!
//! Route handlers organized by dashboard view.

pub mod compare;
pub mod countries;
pub mod health;
pub mod heatmap;
pub mod overview;
pub mod regimes;

use crate::api::error::{ApiError, ApiResult};
use crate::table::Indicator;

/// Parse an indicator name and check it is offered by the requesting view
pub(crate) fn parse_indicator(raw: &str, allowed: &[Indicator], view: &str) -> ApiResult<Indicator> {
    let indicator: Indicator = raw.parse()?;

    if !allowed.contains(&indicator) {
        return Err(ApiError::Validation(format!(
            "{} is not available in the {} view",
            indicator, view
        )));
    }

    Ok(indicator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indicator() {
        assert_eq!(
            parse_indicator("inflation", Indicator::comparable(), "compare").unwrap(),
            Indicator::Inflation
        );
        assert!(matches!(
            parse_indicator("Unemployment", Indicator::comparable(), "compare"),
            Err(ApiError::Validation(_))
        ));
        assert!(parse_indicator("Gold", Indicator::all(), "country").is_err());
    }
}
