//! Fund and position repository/service traits.
//!
//! These traits define the contract for fund data access without tying
//! callers to the in-memory store, allowing alternative backings.

use rust_decimal::Decimal;

use super::funds_model::{Fund, FundHolding, Position};
use crate::errors::Result;

/// Trait defining the contract for fund reference-data access.
pub trait FundRepositoryTrait: Send + Sync {
    /// Retrieves a fund by its ID.
    fn get_by_id(&self, fund_id: &str) -> Result<Fund>;

    /// Lists all funds in catalog order.
    fn list(&self) -> Result<Vec<Fund>>;
}

/// Trait defining the contract for position access.
pub trait PositionRepositoryTrait: Send + Sync {
    /// Retrieves the position held in a fund, if any.
    fn get_by_fund_id(&self, fund_id: &str) -> Result<Option<Position>>;

    /// Lists all positions.
    fn list(&self) -> Result<Vec<Position>>;
}

/// Trait defining the contract for fund service operations.
///
/// The service layer joins reference data with positions and computes
/// position-level totals.
pub trait FundServiceTrait: Send + Sync {
    /// Retrieves a fund by ID.
    fn get_fund(&self, fund_id: &str) -> Result<Fund>;

    /// Lists all funds in catalog order.
    fn list_funds(&self) -> Result<Vec<Fund>>;

    /// Joins a fund with the user's position in it.
    ///
    /// Returns `Error::NotFound` when either the fund or the position
    /// is missing.
    fn fund_with_position(&self, fund_id: &str) -> Result<FundHolding>;

    /// Joins every fund with its position, dropping funds the user does
    /// not hold.
    fn all_funds_with_positions(&self) -> Result<Vec<FundHolding>>;

    /// Sum of current value over all positions.
    fn total_assets(&self) -> Result<Decimal>;
}
