use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::transactions_model::{
    Transaction, TransactionFilter, TransactionKind, TransactionStatus,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::constants::DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};
use crate::funds::FundServiceTrait;
use crate::Error;

/// Service for placing purchase and redemption orders.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    fund_service: Arc<dyn FundServiceTrait>,
    as_of: NaiveDate,
}

impl TransactionService {
    /// Creates a new TransactionService instance.
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        fund_service: Arc<dyn FundServiceTrait>,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            repository,
            fund_service,
            as_of,
        }
    }
}

impl TransactionServiceTrait for TransactionService {
    fn place_purchase(&self, fund_id: &str, amount: Decimal) -> Result<Transaction> {
        let fund = self.fund_service.get_fund(fund_id)?;

        if amount < fund.min_investment {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Amount {} is below the minimum investment {} for fund {}",
                amount, fund.min_investment, fund.id
            ))));
        }

        debug!("Placing purchase of {} in fund {}", amount, fund_id);
        self.repository.add(Transaction {
            id: Uuid::new_v4().to_string(),
            fund_id: fund.id,
            kind: TransactionKind::Purchase,
            status: TransactionStatus::Pending,
            amount,
            units: None,
            date: self.as_of,
            settlement_date: None,
        })
    }

    fn place_redemption(&self, fund_id: &str, units: Decimal) -> Result<Transaction> {
        let holding = self.fund_service.fund_with_position(fund_id)?;
        let position = &holding.position;

        if units <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Redemption units must be positive".to_string(),
            )));
        }
        if units > position.units {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Redemption of {} units exceeds the {} held in fund {}",
                units, position.units, fund_id
            ))));
        }

        // Estimated proceeds at the current valuation.
        let amount =
            (position.current_value * units / position.units).round_dp(DECIMAL_PRECISION);

        debug!(
            "Placing redemption of {} units ({}) from fund {}",
            units, amount, fund_id
        );
        self.repository.add(Transaction {
            id: Uuid::new_v4().to_string(),
            fund_id: holding.fund.id,
            kind: TransactionKind::Redemption,
            status: TransactionStatus::Pending,
            amount,
            units: Some(units),
            date: self.as_of,
            settlement_date: None,
        })
    }

    fn list_transactions(&self, filter: TransactionFilter<'_>) -> Result<Vec<Transaction>> {
        self.repository.list(filter)
    }
}
