//! Balance service trait.

use rust_decimal::Decimal;

use super::balance_model::{Balance, CashActivity};
use crate::errors::Result;

/// Trait defining the contract for cash balance operations.
pub trait BalanceServiceTrait: Send + Sync {
    /// Current balance, with `total_balance` derived from live positions.
    fn balance(&self) -> Result<Balance>;

    /// Cash on hand after in-flight amounts, see [`Balance::total_cash`].
    fn total_cash(&self) -> Result<Decimal>;

    /// Records a deposit request into the pending-deposit bucket.
    fn record_deposit(&self, amount: Decimal) -> Result<CashActivity>;

    /// Records a withdrawal request into the pending-withdraw bucket.
    ///
    /// Fails when the amount exceeds the available balance.
    fn record_withdrawal(&self, amount: Decimal) -> Result<CashActivity>;

    /// Lists recorded cash activities, newest first.
    fn list_activities(&self) -> Result<Vec<CashActivity>>;
}
