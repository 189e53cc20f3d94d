use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use super::balance_model::{Balance, CashActivity, CashActivityKind, CashFigures};
use super::balance_traits::BalanceServiceTrait;
use crate::errors::{Result, ValidationError};
use crate::funds::FundServiceTrait;
use crate::transactions::TransactionStatus;
use crate::Error;

/// Service for the user's cash position.
pub struct BalanceService {
    fund_service: Arc<dyn FundServiceTrait>,
    figures: RwLock<CashFigures>,
    activities: RwLock<Vec<CashActivity>>,
    as_of: NaiveDate,
}

impl BalanceService {
    /// Creates a new BalanceService instance.
    pub fn new(
        fund_service: Arc<dyn FundServiceTrait>,
        figures: CashFigures,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            fund_service,
            figures: RwLock::new(figures),
            activities: RwLock::new(Vec::new()),
            as_of,
        }
    }

    fn validate_amount(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cash amount must be positive".to_string(),
            )));
        }
        Ok(())
    }

    fn record(&self, kind: CashActivityKind, amount: Decimal) -> CashActivity {
        let activity = CashActivity {
            id: Uuid::new_v4().to_string(),
            kind,
            amount,
            date: self.as_of,
            status: TransactionStatus::Pending,
        };
        self.activities.write().unwrap().push(activity.clone());
        activity
    }
}

impl BalanceServiceTrait for BalanceService {
    fn balance(&self) -> Result<Balance> {
        let figures = self.figures.read().unwrap().clone();
        Ok(Balance {
            total_balance: self.fund_service.total_assets()?,
            available_balance: figures.available_balance,
            pending_deposit: figures.pending_deposit,
            pending_withdraw: figures.pending_withdraw,
            reserved_amount: figures.reserved_amount,
        })
    }

    fn total_cash(&self) -> Result<Decimal> {
        Ok(self.balance()?.total_cash())
    }

    fn record_deposit(&self, amount: Decimal) -> Result<CashActivity> {
        Self::validate_amount(amount)?;

        debug!("Recording deposit of {}", amount);
        self.figures.write().unwrap().pending_deposit += amount;
        Ok(self.record(CashActivityKind::Deposit, amount))
    }

    fn record_withdrawal(&self, amount: Decimal) -> Result<CashActivity> {
        Self::validate_amount(amount)?;

        let available = self.figures.read().unwrap().available_balance;
        if amount > available {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Withdrawal of {} exceeds available balance {}",
                amount, available
            ))));
        }

        debug!("Recording withdrawal of {}", amount);
        self.figures.write().unwrap().pending_withdraw += amount;
        Ok(self.record(CashActivityKind::Withdrawal, amount))
    }

    fn list_activities(&self) -> Result<Vec<CashActivity>> {
        let mut activities = self.activities.read().unwrap().clone();
        activities.reverse();
        Ok(activities)
    }
}
