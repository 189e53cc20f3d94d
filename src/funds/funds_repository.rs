//! In-memory fund and position stores.

use super::funds_model::{Fund, Position};
use super::funds_traits::{FundRepositoryTrait, PositionRepositoryTrait};
use crate::errors::Result;
use crate::Error;

/// Seeded, read-only fund catalog.
pub struct FundRepository {
    funds: Vec<Fund>,
}

impl FundRepository {
    /// Creates a repository over a seeded catalog.
    ///
    /// Every seed record is validated up front so a bad fixture fails
    /// at construction, not at first use.
    pub fn new(funds: Vec<Fund>) -> Result<Self> {
        for fund in &funds {
            fund.validate()?;
        }
        Ok(Self { funds })
    }
}

impl FundRepositoryTrait for FundRepository {
    fn get_by_id(&self, fund_id: &str) -> Result<Fund> {
        self.funds
            .iter()
            .find(|f| f.id == fund_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Fund {}", fund_id)))
    }

    fn list(&self) -> Result<Vec<Fund>> {
        Ok(self.funds.clone())
    }
}

/// Seeded, read-only position store.
pub struct PositionRepository {
    positions: Vec<Position>,
}

impl PositionRepository {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }
}

impl PositionRepositoryTrait for PositionRepository {
    fn get_by_fund_id(&self, fund_id: &str) -> Result<Option<Position>> {
        Ok(self
            .positions
            .iter()
            .find(|p| p.fund_id == fund_id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Position>> {
        Ok(self.positions.clone())
    }
}
