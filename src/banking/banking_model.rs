//! Bank account domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::{Error, Result};

/// Japanese deposit account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankAccountType {
    /// Futsuu (ordinary savings)
    Ordinary,
    /// Touza (current/checking)
    Checking,
}

/// A bank account as printed on a transfer slip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub bank_name: String,
    pub branch_name: String,
    pub account_type: BankAccountType,
    pub account_number: String,
    /// Account holder name
    pub account_name: String,
}

/// A bank account the user registered for deposits and withdrawals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBankAccount {
    #[serde(flatten)]
    pub account: BankAccount,
    pub is_default: bool,
    /// Ownership confirmed by a test transfer
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used: Option<NaiveDate>,
}

/// Input model for registering a bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBankAccount {
    pub bank_name: String,
    pub branch_name: String,
    pub account_type: BankAccountType,
    pub account_number: String,
    pub account_name: String,
    pub is_default: bool,
}

impl NewBankAccount {
    /// Validates the registration input.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("bankName", &self.bank_name),
            ("branchName", &self.branch_name),
            ("accountName", &self.account_name),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(
                    field.to_string(),
                )));
            }
        }
        if self.account_number.len() != 7
            || !self.account_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account number must be exactly 7 digits".to_string(),
            )));
        }
        Ok(())
    }
}
