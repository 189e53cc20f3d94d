//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of fund transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Buying into a fund
    Purchase,
    /// Selling units back
    Redemption,
}

/// Processing status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Rejected,
}

/// A purchase or redemption order.
///
/// Orders never settle in this core: placing one appends a Pending
/// record and leaves positions untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub fund_id: String,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Decimal>,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_date: Option<NaiveDate>,
}

/// Listing filter; `None` fields match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilter<'a> {
    pub fund_id: Option<&'a str>,
    pub status: Option<TransactionStatus>,
}
