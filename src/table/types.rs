//! Core data types for the indicator table
//!
//! This module defines the fundamental types shared by every layer:
//! - `Indicator`: The closed set of numeric columns
//! - `Section`: Dashboard grouping of indicators
//! - `FxMeasure`: Which FX column the source file carries
//! - `IndicatorRow`: One (Country, Year) observation

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A numeric indicator column
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Indicator {
    #[serde(rename = "GDP_Growth")]
    GdpGrowth,
    #[serde(rename = "Inflation")]
    Inflation,
    #[serde(rename = "Unemployment")]
    Unemployment,
    #[serde(rename = "Policy_Rate")]
    PolicyRate,
    #[serde(rename = "Debt_GDP")]
    DebtGdp,
    #[serde(rename = "Fiscal_Balance")]
    FiscalBalance,
    #[serde(rename = "Current_Account")]
    CurrentAccount,
    #[serde(rename = "FX_Dep_YoY")]
    Fx,
    #[serde(rename = "TenY_Yield")]
    TenYearYield,
    #[serde(rename = "Equity_YoY")]
    EquityYoY,
}

impl Indicator {
    /// Every indicator, in source column order
    pub fn all() -> &'static [Indicator] {
        &[
            Indicator::GdpGrowth,
            Indicator::Inflation,
            Indicator::Unemployment,
            Indicator::PolicyRate,
            Indicator::DebtGdp,
            Indicator::FiscalBalance,
            Indicator::CurrentAccount,
            Indicator::Fx,
            Indicator::TenYearYield,
            Indicator::EquityYoY,
        ]
    }

    /// Indicators offered in the multi-country comparison
    pub fn comparable() -> &'static [Indicator] {
        &[
            Indicator::GdpGrowth,
            Indicator::Inflation,
            Indicator::PolicyRate,
            Indicator::TenYearYield,
            Indicator::DebtGdp,
            Indicator::FiscalBalance,
            Indicator::CurrentAccount,
            Indicator::Fx,
            Indicator::EquityYoY,
        ]
    }

    /// Indicators offered in the heatmap
    pub fn heatmap() -> &'static [Indicator] {
        &[
            Indicator::GdpGrowth,
            Indicator::Inflation,
            Indicator::PolicyRate,
            Indicator::TenYearYield,
            Indicator::DebtGdp,
            Indicator::FiscalBalance,
            Indicator::CurrentAccount,
            Indicator::Fx,
        ]
    }

    /// Canonical CSV column name
    pub fn column(&self) -> &'static str {
        match self {
            Indicator::GdpGrowth => "GDP_Growth",
            Indicator::Inflation => "Inflation",
            Indicator::Unemployment => "Unemployment",
            Indicator::PolicyRate => "Policy_Rate",
            Indicator::DebtGdp => "Debt_GDP",
            Indicator::FiscalBalance => "Fiscal_Balance",
            Indicator::CurrentAccount => "Current_Account",
            Indicator::Fx => FxMeasure::DepreciationYoY.column(),
            Indicator::TenYearYield => "TenY_Yield",
            Indicator::EquityYoY => "Equity_YoY",
        }
    }

    /// Chart title shown above the series
    pub fn title(&self) -> &'static str {
        match self {
            Indicator::GdpGrowth => "GDP Growth (% YoY)",
            Indicator::Inflation => "Inflation (% YoY)",
            Indicator::Unemployment => "Unemployment (%)",
            Indicator::PolicyRate => "Policy Rate (%)",
            Indicator::DebtGdp => "Government Debt (% GDP)",
            Indicator::FiscalBalance => "Fiscal Balance (% GDP)",
            Indicator::CurrentAccount => "Current Account (% GDP)",
            Indicator::Fx => FxMeasure::DepreciationYoY.title(),
            Indicator::TenYearYield => "10Y Sovereign Yield (%)",
            Indicator::EquityYoY => "Equity Index (% YoY)",
        }
    }

    /// Dashboard section the indicator is charted under
    pub fn section(&self) -> Section {
        match self {
            Indicator::GdpGrowth => Section::RealEconomy,
            Indicator::Inflation | Indicator::PolicyRate => Section::PricesAndMonetaryPolicy,
            Indicator::Unemployment => Section::LaborMarket,
            Indicator::DebtGdp | Indicator::FiscalBalance => Section::FiscalAndSovereign,
            Indicator::CurrentAccount | Indicator::Fx => Section::ExternalAccounts,
            Indicator::TenYearYield | Indicator::EquityYoY => Section::Markets,
        }
    }

    /// Column name as carried by a table with the given FX measure
    pub fn column_for(&self, fx_measure: FxMeasure) -> &'static str {
        match self {
            Indicator::Fx => fx_measure.column(),
            other => other.column(),
        }
    }

    /// Chart title for a table with the given FX measure
    pub fn title_for(&self, fx_measure: FxMeasure) -> &'static str {
        match self {
            Indicator::Fx => fx_measure.title(),
            other => other.title(),
        }
    }

    pub fn is_comparable(&self) -> bool {
        Self::comparable().contains(self)
    }

    pub fn in_heatmap(&self) -> bool {
        Self::heatmap().contains(self)
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Error returned when a string names no known indicator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown indicator: {0}")]
pub struct UnknownIndicator(pub String);

impl FromStr for Indicator {
    type Err = UnknownIndicator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case(FxMeasure::Rate.column()) {
            return Ok(Indicator::Fx);
        }
        Indicator::all()
            .iter()
            .copied()
            .find(|i| i.column().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownIndicator(s.to_string()))
    }
}

/// Dashboard section grouping
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    RealEconomy,
    PricesAndMonetaryPolicy,
    LaborMarket,
    FiscalAndSovereign,
    ExternalAccounts,
    Markets,
}

impl Section {
    /// Sections in display order
    pub fn all() -> &'static [Section] {
        &[
            Section::RealEconomy,
            Section::PricesAndMonetaryPolicy,
            Section::LaborMarket,
            Section::FiscalAndSovereign,
            Section::ExternalAccounts,
            Section::Markets,
        ]
    }

    /// Indicators charted in this section, in display order
    pub fn indicators(&self) -> Vec<Indicator> {
        Indicator::all()
            .iter()
            .copied()
            .filter(|i| i.section() == *self)
            .collect()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::RealEconomy => write!(f, "Real Economy"),
            Section::PricesAndMonetaryPolicy => write!(f, "Prices & Monetary Policy"),
            Section::LaborMarket => write!(f, "Labor Market"),
            Section::FiscalAndSovereign => write!(f, "Fiscal & Sovereign"),
            Section::ExternalAccounts => write!(f, "External Accounts"),
            Section::Markets => write!(f, "Markets"),
        }
    }
}

/// Which FX measure the source carries in the FX slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FxMeasure {
    /// `FX_Dep_YoY`: year-on-year depreciation (%)
    #[default]
    #[serde(rename = "depreciation_yoy")]
    DepreciationYoY,
    /// `FX_Rate`: exchange rate level
    Rate,
}

impl FxMeasure {
    pub fn column(&self) -> &'static str {
        match self {
            FxMeasure::DepreciationYoY => "FX_Dep_YoY",
            FxMeasure::Rate => "FX_Rate",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FxMeasure::DepreciationYoY => "FX Depreciation (% YoY)",
            FxMeasure::Rate => "FX Rate",
        }
    }
}

/// One country-year observation
///
/// Indicator values are optional: a missing cell stays `None` and is never
/// coerced to zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IndicatorRow {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "GDP_Growth")]
    pub gdp_growth: Option<f64>,
    #[serde(rename = "Inflation")]
    pub inflation: Option<f64>,
    #[serde(rename = "Unemployment")]
    pub unemployment: Option<f64>,
    #[serde(rename = "Policy_Rate")]
    pub policy_rate: Option<f64>,
    #[serde(rename = "Debt_GDP")]
    pub debt_gdp: Option<f64>,
    #[serde(rename = "Fiscal_Balance")]
    pub fiscal_balance: Option<f64>,
    #[serde(rename = "Current_Account")]
    pub current_account: Option<f64>,
    #[serde(rename = "FX")]
    pub fx: Option<f64>,
    #[serde(rename = "TenY_Yield")]
    pub ten_year_yield: Option<f64>,
    #[serde(rename = "Equity_YoY")]
    pub equity_yoy: Option<f64>,
}

impl IndicatorRow {
    /// Create a row with every indicator missing
    pub fn new(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
            ..Default::default()
        }
    }

    /// Builder method: set one indicator value
    pub fn with(mut self, indicator: Indicator, value: f64) -> Self {
        *self.slot_mut(indicator) = Some(value);
        self
    }

    /// Value of an indicator, `None` when missing
    pub fn value(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::GdpGrowth => self.gdp_growth,
            Indicator::Inflation => self.inflation,
            Indicator::Unemployment => self.unemployment,
            Indicator::PolicyRate => self.policy_rate,
            Indicator::DebtGdp => self.debt_gdp,
            Indicator::FiscalBalance => self.fiscal_balance,
            Indicator::CurrentAccount => self.current_account,
            Indicator::Fx => self.fx,
            Indicator::TenYearYield => self.ten_year_yield,
            Indicator::EquityYoY => self.equity_yoy,
        }
    }

    pub(crate) fn slot_mut(&mut self, indicator: Indicator) -> &mut Option<f64> {
        match indicator {
            Indicator::GdpGrowth => &mut self.gdp_growth,
            Indicator::Inflation => &mut self.inflation,
            Indicator::Unemployment => &mut self.unemployment,
            Indicator::PolicyRate => &mut self.policy_rate,
            Indicator::DebtGdp => &mut self.debt_gdp,
            Indicator::FiscalBalance => &mut self.fiscal_balance,
            Indicator::CurrentAccount => &mut self.current_account,
            Indicator::Fx => &mut self.fx,
            Indicator::TenYearYield => &mut self.ten_year_yield,
            Indicator::EquityYoY => &mut self.equity_yoy,
        }
    }
}
