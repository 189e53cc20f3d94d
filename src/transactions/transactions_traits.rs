//! Transaction repository and service traits.

use rust_decimal::Decimal;

use super::transactions_model::{Transaction, TransactionFilter};
use crate::errors::Result;

/// Trait defining the contract for the transaction store.
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Appends a transaction.
    fn add(&self, transaction: Transaction) -> Result<Transaction>;

    /// Lists transactions matching the filter, newest first.
    fn list(&self, filter: TransactionFilter<'_>) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for order placement.
pub trait TransactionServiceTrait: Send + Sync {
    /// Places a purchase order for a fund.
    ///
    /// The amount must meet the fund's minimum investment.
    fn place_purchase(&self, fund_id: &str, amount: Decimal) -> Result<Transaction>;

    /// Places a redemption order against a held position.
    ///
    /// The unit count must not exceed the units held.
    fn place_redemption(&self, fund_id: &str, units: Decimal) -> Result<Transaction>;

    /// Lists transactions matching the filter, newest first.
    fn list_transactions(&self, filter: TransactionFilter<'_>) -> Result<Vec<Transaction>>;
}
