//! Fund performance domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of a fund's indexed performance (launch = 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundPerformancePoint {
    /// First day of the month
    pub month: NaiveDate,
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<Decimal>,
}

/// A fund's performance series with its comparison index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundPerformanceResponse {
    pub data: Vec<FundPerformancePoint>,
    /// Benchmark display name, if the fund has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<String>,
}

/// Reporting window for the performance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformancePeriod {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    ThreeYears,
    FiveYears,
    Inception,
}

impl PerformancePeriod {
    /// Label as shown in the performance table.
    pub fn label(&self) -> &'static str {
        match self {
            PerformancePeriod::OneMonth => "1 month",
            PerformancePeriod::ThreeMonths => "3 months",
            PerformancePeriod::SixMonths => "6 months",
            PerformancePeriod::OneYear => "1 year",
            PerformancePeriod::ThreeYears => "3 years",
            PerformancePeriod::FiveYears => "5 years",
            PerformancePeriod::Inception => "Since inception",
        }
    }
}

/// One row of the portfolio performance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodPerformance {
    pub period: PerformancePeriod,
    /// Return over the period, percent
    pub return_pct: Decimal,
    /// Annualized volatility, percent
    pub risk_pct: Decimal,
    /// Sharpe ratio
    pub sharpe: Decimal,
}
