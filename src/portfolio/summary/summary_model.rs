//! Portfolio summary domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived portfolio-level totals; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Market value of all positions
    pub total_assets: Decimal,
    /// Invested principal (sum of cost bases)
    pub total_principal: Decimal,
    /// Unrealized gain over all positions
    pub total_gain: Decimal,
    /// Gain as a percentage of principal, 0% on a zero principal
    pub gain_percent: Decimal,
    /// Cash on hand
    pub cash_balance: Decimal,
}

impl PortfolioSummary {
    /// An all-zero summary for an empty portfolio.
    pub fn empty() -> Self {
        Self {
            total_assets: Decimal::ZERO,
            total_principal: Decimal::ZERO,
            total_gain: Decimal::ZERO,
            gain_percent: Decimal::ZERO,
            cash_balance: Decimal::ZERO,
        }
    }
}
