//! Fund and position domain models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::ValidationError;
use crate::{Error, Result};

use super::funds_constants::{MAX_RISK_SCORE, MIN_RISK_SCORE};

/// Strategy category of a fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundType {
    /// Long/short equity strategies
    EquityLongShort,
    /// Multi-asset macro strategies
    GlobalMacro,
    /// Merger arbitrage and other event strategies
    EventDriven,
    /// Direct lending and mezzanine finance
    PrivateCredit,
}

impl FundType {
    /// Display name for the strategy category.
    pub fn display_name(&self) -> &'static str {
        match self {
            FundType::EquityLongShort => "Equity Long/Short",
            FundType::GlobalMacro => "Global Macro",
            FundType::EventDriven => "Event Driven",
            FundType::PrivateCredit => "Private Credit",
        }
    }
}

/// Immutable fund reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub id: String,
    pub name: String,
    pub fund_type: FundType,
    /// Risk score, 1 (lowest) to 5 (highest)
    pub risk: u8,
    pub currency: String,
    pub min_investment: Decimal,
    pub description: String,
    pub features: Vec<String>,
}

impl Fund {
    /// Validates fund reference data at seed time.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Fund name cannot be empty".to_string(),
            )));
        }
        if !(MIN_RISK_SCORE..=MAX_RISK_SCORE).contains(&self.risk) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Risk score {} is outside {}..={}",
                self.risk, MIN_RISK_SCORE, MAX_RISK_SCORE
            ))));
        }
        if self.min_investment <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Minimum investment must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// A holding record linking the user to a fund, with cost and market value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub fund_id: String,
    pub units: Decimal,
    /// Cost basis
    pub book_value: Decimal,
    /// Market value
    pub current_value: Decimal,
    pub unrealized_gain: Decimal,
    pub unrealized_gain_percent: Decimal,
}

impl Position {
    /// Builds a position with the derived gain fields.
    ///
    /// Invariant: `unrealized_gain == current_value - book_value`, and
    /// `unrealized_gain_percent == unrealized_gain / book_value * 100`
    /// (0 when the book value is zero).
    pub fn new(
        fund_id: impl Into<String>,
        units: Decimal,
        book_value: Decimal,
        current_value: Decimal,
    ) -> Self {
        let unrealized_gain = current_value - book_value;
        Self {
            fund_id: fund_id.into(),
            units,
            book_value,
            current_value,
            unrealized_gain,
            unrealized_gain_percent: gain_percent(unrealized_gain, book_value),
        }
    }
}

/// Gain expressed as a percentage of cost basis, 0% on a zero basis.
pub fn gain_percent(gain: Decimal, basis: Decimal) -> Decimal {
    if basis.is_zero() {
        Decimal::ZERO
    } else {
        (gain / basis * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

/// A fund joined with the user's position in it.
///
/// Produced by the join in `FundService`; serializes flat so the view
/// layer sees a single merged record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundHolding {
    #[serde(flatten)]
    pub fund: Fund,
    #[serde(flatten)]
    pub position: Position,
}

impl FundHolding {
    /// Joins a fund with its position.
    pub fn join(fund: Fund, position: Position) -> Self {
        Self { fund, position }
    }
}
