//! In-memory transaction store.

use std::sync::RwLock;

use super::transactions_model::{Transaction, TransactionFilter};
use super::transactions_traits::TransactionRepositoryTrait;
use crate::errors::Result;

/// Seeded transaction history plus any orders placed this session.
pub struct TransactionRepository {
    transactions: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: RwLock::new(transactions),
        }
    }
}

impl TransactionRepositoryTrait for TransactionRepository {
    fn add(&self, transaction: Transaction) -> Result<Transaction> {
        self.transactions
            .write()
            .unwrap()
            .push(transaction.clone());
        Ok(transaction)
    }

    fn list(&self, filter: TransactionFilter<'_>) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.read().unwrap();
        let mut matched: Vec<Transaction> = transactions
            .iter()
            .filter(|t| filter.fund_id.map_or(true, |id| t.fund_id == id))
            .filter(|t| filter.status.map_or(true, |s| t.status == s))
            .cloned()
            .collect();

        // Newest first; the store appends in chronological order.
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(matched)
    }
}
