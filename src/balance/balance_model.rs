//! Cash balance domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionStatus;

/// The user's cash position as shown on the cash screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Market value of all fund positions
    pub total_balance: Decimal,
    /// Cash immediately available for withdrawal
    pub available_balance: Decimal,
    /// Deposits still being processed
    pub pending_deposit: Decimal,
    /// Withdrawals still being processed
    pub pending_withdraw: Decimal,
    /// Cash earmarked for placed purchase orders
    pub reserved_amount: Decimal,
}

impl Balance {
    /// Cash the user holds once in-flight amounts settle.
    pub fn total_cash(&self) -> Decimal {
        self.available_balance + self.pending_deposit - self.pending_withdraw
            - self.reserved_amount
    }
}

/// Seedable cash figures; `Balance::total_balance` is derived live.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFigures {
    pub available_balance: Decimal,
    pub pending_deposit: Decimal,
    pub pending_withdraw: Decimal,
    pub reserved_amount: Decimal,
}

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashActivityKind {
    Deposit,
    Withdrawal,
}

/// A recorded cash deposit or withdrawal.
///
/// Nothing ever settles in this mock core; recording an activity only
/// moves the amount into the matching pending bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashActivity {
    pub id: String,
    pub kind: CashActivityKind,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: TransactionStatus,
}
