use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::funds_model::{Fund, FundHolding};
use super::funds_traits::{FundRepositoryTrait, FundServiceTrait, PositionRepositoryTrait};
use crate::errors::Result;
use crate::Error;

/// Service joining fund reference data with the user's positions.
pub struct FundService {
    fund_repository: Arc<dyn FundRepositoryTrait>,
    position_repository: Arc<dyn PositionRepositoryTrait>,
}

impl FundService {
    /// Creates a new FundService instance.
    pub fn new(
        fund_repository: Arc<dyn FundRepositoryTrait>,
        position_repository: Arc<dyn PositionRepositoryTrait>,
    ) -> Self {
        Self {
            fund_repository,
            position_repository,
        }
    }
}

impl FundServiceTrait for FundService {
    fn get_fund(&self, fund_id: &str) -> Result<Fund> {
        self.fund_repository.get_by_id(fund_id)
    }

    fn list_funds(&self) -> Result<Vec<Fund>> {
        self.fund_repository.list()
    }

    fn fund_with_position(&self, fund_id: &str) -> Result<FundHolding> {
        let fund = self.fund_repository.get_by_id(fund_id)?;
        let position = self
            .position_repository
            .get_by_fund_id(fund_id)?
            .ok_or_else(|| Error::NotFound(format!("Position for fund {}", fund_id)))?;
        Ok(FundHolding::join(fund, position))
    }

    fn all_funds_with_positions(&self) -> Result<Vec<FundHolding>> {
        let funds = self.fund_repository.list()?;
        let mut holdings = Vec::with_capacity(funds.len());

        for fund in funds {
            match self.position_repository.get_by_fund_id(&fund.id)? {
                Some(position) => holdings.push(FundHolding::join(fund, position)),
                // Catalog funds the user does not hold are filtered, not errors.
                None => debug!("Fund {} has no position, skipping", fund.id),
            }
        }

        Ok(holdings)
    }

    fn total_assets(&self) -> Result<Decimal> {
        let positions = self.position_repository.list()?;
        Ok(positions.iter().map(|p| p.current_value).sum())
    }
}
