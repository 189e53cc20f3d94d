//! Service computing portfolio allocations by fund type and risk.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use super::allocation_model::{PortfolioAllocations, RiskAllocation, TypeAllocation};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::funds::{FundServiceTrait, FundType};

/// Trait for the allocation service.
pub trait AllocationServiceTrait: Send + Sync {
    /// Computes current-value groupings by fund type and risk score.
    fn portfolio_allocations(&self) -> Result<PortfolioAllocations>;
}

/// Service computing the allocation chart's groupings.
pub struct AllocationService {
    fund_service: Arc<dyn FundServiceTrait>,
}

impl AllocationService {
    pub fn new(fund_service: Arc<dyn FundServiceTrait>) -> Self {
        Self { fund_service }
    }
}

impl AllocationServiceTrait for AllocationService {
    fn portfolio_allocations(&self) -> Result<PortfolioAllocations> {
        let holdings = self.fund_service.all_funds_with_positions()?;
        if holdings.is_empty() {
            return Ok(PortfolioAllocations::default());
        }

        let total_value: Decimal = holdings.iter().map(|h| h.position.current_value).sum();

        // Accumulate in first-occurrence order.
        let mut by_type: Vec<(FundType, Decimal)> = Vec::new();
        let mut by_risk: Vec<(u8, Decimal)> = Vec::new();

        for holding in &holdings {
            let value = holding.position.current_value;

            match by_type
                .iter_mut()
                .find(|(t, _)| *t == holding.fund.fund_type)
            {
                Some((_, group)) => *group += value,
                None => by_type.push((holding.fund.fund_type, value)),
            }
            match by_risk.iter_mut().find(|(r, _)| *r == holding.fund.risk) {
                Some((_, group)) => *group += value,
                None => by_risk.push((holding.fund.risk, value)),
            }
        }

        debug!(
            "Allocations over {} holdings: {} types, {} risk buckets",
            holdings.len(),
            by_type.len(),
            by_risk.len()
        );

        Ok(PortfolioAllocations {
            by_type: by_type
                .into_iter()
                .map(|(fund_type, value)| TypeAllocation {
                    fund_type,
                    value,
                    percentage: percentage_of(value, total_value),
                })
                .collect(),
            by_risk: by_risk
                .into_iter()
                .map(|(risk, value)| RiskAllocation {
                    risk,
                    value,
                    percentage: percentage_of(value, total_value),
                })
                .collect(),
            total_value,
        })
    }
}

fn percentage_of(value: Decimal, total: Decimal) -> Decimal {
    if total > Decimal::ZERO {
        (value / total * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    }
}
