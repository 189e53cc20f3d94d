//! Service computing portfolio-level totals.

use log::debug;
use std::sync::Arc;

use super::summary_model::PortfolioSummary;
use crate::balance::BalanceServiceTrait;
use crate::errors::Result;
use crate::funds::{gain_percent, FundServiceTrait};

/// Trait for the summary service.
pub trait SummaryServiceTrait: Send + Sync {
    /// Computes the portfolio summary from live positions and cash.
    fn portfolio_summary(&self) -> Result<PortfolioSummary>;
}

/// Service computing the dashboard's headline numbers.
pub struct SummaryService {
    fund_service: Arc<dyn FundServiceTrait>,
    balance_service: Arc<dyn BalanceServiceTrait>,
}

impl SummaryService {
    pub fn new(
        fund_service: Arc<dyn FundServiceTrait>,
        balance_service: Arc<dyn BalanceServiceTrait>,
    ) -> Self {
        Self {
            fund_service,
            balance_service,
        }
    }
}

impl SummaryServiceTrait for SummaryService {
    fn portfolio_summary(&self) -> Result<PortfolioSummary> {
        let holdings = self.fund_service.all_funds_with_positions()?;

        let mut summary = PortfolioSummary::empty();
        for holding in &holdings {
            summary.total_assets += holding.position.current_value;
            summary.total_principal += holding.position.book_value;
            summary.total_gain += holding.position.unrealized_gain;
        }
        summary.gain_percent = gain_percent(summary.total_gain, summary.total_principal);
        summary.cash_balance = self.balance_service.total_cash()?;

        debug!(
            "Portfolio summary: assets={}, principal={}, gain={}",
            summary.total_assets, summary.total_principal, summary.total_gain
        );
        Ok(summary)
    }
}
