//! Allocation models for portfolio breakdown by fund type and risk.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::funds::FundType;

/// Current value grouped under one fund type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAllocation {
    pub fund_type: FundType,
    /// Total current value in the group
    pub value: Decimal,
    /// Percentage of total current value (0-100)
    pub percentage: Decimal,
}

/// Current value grouped under one risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAllocation {
    /// Risk score, 1-5
    pub risk: u8,
    pub value: Decimal,
    pub percentage: Decimal,
}

/// Complete allocation breakdown.
///
/// Groups appear in first-occurrence order over the holdings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAllocations {
    pub by_type: Vec<TypeAllocation>,
    pub by_risk: Vec<RiskAllocation>,
    /// Total current value across all holdings
    pub total_value: Decimal,
}
