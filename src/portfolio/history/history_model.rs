//! Portfolio history domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Chart period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryPeriod {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

impl HistoryPeriod {
    /// Every period, in display order.
    pub const ALL_PERIODS: [HistoryPeriod; 5] = [
        HistoryPeriod::OneMonth,
        HistoryPeriod::ThreeMonths,
        HistoryPeriod::SixMonths,
        HistoryPeriod::OneYear,
        HistoryPeriod::All,
    ];

    /// Length of the period's window in days.
    pub fn days(&self) -> i64 {
        match self {
            HistoryPeriod::OneMonth => 30,
            HistoryPeriod::ThreeMonths => 90,
            HistoryPeriod::SixMonths => 180,
            HistoryPeriod::OneYear => 365,
            HistoryPeriod::All => 730,
        }
    }

    /// Short label as shown on the period switcher.
    pub fn label(&self) -> &'static str {
        match self {
            HistoryPeriod::OneMonth => "1M",
            HistoryPeriod::ThreeMonths => "3M",
            HistoryPeriod::SixMonths => "6M",
            HistoryPeriod::OneYear => "1Y",
            HistoryPeriod::All => "ALL",
        }
    }
}

/// One day of portfolio history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub total_assets: Decimal,
    pub principal: Decimal,
    pub cash: Decimal,
}

/// One series per period, keyed the way the chart consumes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioHistory {
    #[serde(rename = "1M")]
    pub one_month: Vec<HistoryPoint>,
    #[serde(rename = "3M")]
    pub three_months: Vec<HistoryPoint>,
    #[serde(rename = "6M")]
    pub six_months: Vec<HistoryPoint>,
    #[serde(rename = "1Y")]
    pub one_year: Vec<HistoryPoint>,
    #[serde(rename = "ALL")]
    pub all: Vec<HistoryPoint>,
}

impl PortfolioHistory {
    /// The series for a period.
    pub fn for_period(&self, period: HistoryPeriod) -> &[HistoryPoint] {
        match period {
            HistoryPeriod::OneMonth => &self.one_month,
            HistoryPeriod::ThreeMonths => &self.three_months,
            HistoryPeriod::SixMonths => &self.six_months,
            HistoryPeriod::OneYear => &self.one_year,
            HistoryPeriod::All => &self.all,
        }
    }
}
