//! Classification Engine
//!
//! Threshold rules mapping indicator values to coarse regime labels. All
//! comparisons are strict, so a value sitting exactly on a threshold falls
//! into the next bucket down the rule list (3.0 inflation is Moderate, a
//! real rate of exactly 2.0 is Neutral).
//!
//! A missing input never defaults to a bucket: it yields
//! [`ClassifyError::MissingValue`] naming the indicator.

use crate::table::Indicator;
use serde::Serialize;
use thiserror::Error;

/// Why a dimension could not be classified
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClassifyError {
    #[error("Missing value for {indicator}")]
    MissingValue { indicator: Indicator },
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Inflation regime, from the annual inflation rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InflationRegime {
    Low,
    Moderate,
    High,
    Extreme,
}

/// Monetary stance, from the real policy rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MonetaryStance {
    Restrictive,
    Neutral,
    Loose,
}

/// Fiscal position, from the fiscal balance (% GDP)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FiscalPosition {
    Neutral,
    Slippage,
    Stress,
}

/// External position, from the current account (% GDP)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExternalPosition {
    Surplus,
    Balanced,
    Deficit,
}

/// Common surface of the regime label enums
pub trait RegimeLabel: 'static + Copy + Eq + std::hash::Hash + std::fmt::Debug + Serialize {
    /// Every label, strictest-last
    fn all() -> &'static [Self];

    fn name(&self) -> &'static str;
}

macro_rules! regime_label {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl RegimeLabel for $ty {
            fn all() -> &'static [Self] {
                &[$($ty::$variant),+]
            }

            fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => stringify!($variant)),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

regime_label!(InflationRegime { Low, Moderate, High, Extreme });
regime_label!(MonetaryStance { Restrictive, Neutral, Loose });
regime_label!(FiscalPosition { Neutral, Slippage, Stress });
regime_label!(ExternalPosition { Surplus, Balanced, Deficit });

/// Reject `None` and NaN
fn present(value: Option<f64>, indicator: Indicator) -> ClassifyResult<f64> {
    match value {
        Some(v) if !v.is_nan() => Ok(v),
        _ => Err(ClassifyError::MissingValue { indicator }),
    }
}

/// Policy rate minus inflation
pub fn real_rate(policy_rate: f64, inflation: f64) -> f64 {
    policy_rate - inflation
}

/// <3 Low, <8 Moderate, <20 High, otherwise Extreme
pub fn classify_inflation(inflation: Option<f64>) -> ClassifyResult<InflationRegime> {
    let x = present(inflation, Indicator::Inflation)?;

    Ok(if x < 3.0 {
        InflationRegime::Low
    } else if x < 8.0 {
        InflationRegime::Moderate
    } else if x < 20.0 {
        InflationRegime::High
    } else {
        InflationRegime::Extreme
    })
}

/// Real rate >2 Restrictive, >-2 Neutral, otherwise Loose
///
/// Reports the policy rate first when both inputs are missing.
pub fn classify_monetary(
    policy_rate: Option<f64>,
    inflation: Option<f64>,
) -> ClassifyResult<MonetaryStance> {
    let policy = present(policy_rate, Indicator::PolicyRate)?;
    let infl = present(inflation, Indicator::Inflation)?;
    let real = real_rate(policy, infl);

    Ok(if real > 2.0 {
        MonetaryStance::Restrictive
    } else if real > -2.0 {
        MonetaryStance::Neutral
    } else {
        MonetaryStance::Loose
    })
}

/// >-2 Neutral, >-5 Slippage, otherwise Stress
pub fn classify_fiscal(fiscal_balance: Option<f64>) -> ClassifyResult<FiscalPosition> {
    let x = present(fiscal_balance, Indicator::FiscalBalance)?;

    Ok(if x > -2.0 {
        FiscalPosition::Neutral
    } else if x > -5.0 {
        FiscalPosition::Slippage
    } else {
        FiscalPosition::Stress
    })
}

/// >2 Surplus, >-2 Balanced, otherwise Deficit
pub fn classify_external(current_account: Option<f64>) -> ClassifyResult<ExternalPosition> {
    let x = present(current_account, Indicator::CurrentAccount)?;

    Ok(if x > 2.0 {
        ExternalPosition::Surplus
    } else if x > -2.0 {
        ExternalPosition::Balanced
    } else {
        ExternalPosition::Deficit
    })
}
