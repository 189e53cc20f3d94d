//! Bank account repository and service traits.

use super::banking_model::{BankAccount, NewBankAccount, UserBankAccount};
use crate::errors::Result;

/// Trait defining the contract for the user bank-account store.
pub trait BankAccountRepositoryTrait: Send + Sync {
    /// Lists registered accounts in registration order.
    fn list(&self) -> Result<Vec<UserBankAccount>>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<UserBankAccount>;

    /// Appends an account.
    fn add(&self, account: UserBankAccount) -> Result<UserBankAccount>;

    /// Marks one account as default, clearing any previous default.
    fn set_default(&self, account_id: &str) -> Result<UserBankAccount>;
}

/// Trait defining the contract for bank account operations.
pub trait BankingServiceTrait: Send + Sync {
    /// Lists the user's registered accounts.
    fn list_accounts(&self) -> Result<Vec<UserBankAccount>>;

    /// The account marked as default, if any.
    fn default_account(&self) -> Result<Option<UserBankAccount>>;

    /// The firm's deposit account shown on the funding screen.
    fn company_deposit_account(&self) -> Result<BankAccount>;

    /// Registers a new account; it starts unverified.
    ///
    /// The first registered account becomes the default regardless of
    /// the request.
    fn add_account(&self, new_account: NewBankAccount) -> Result<UserBankAccount>;

    /// Makes an existing account the default.
    fn set_default_account(&self, account_id: &str) -> Result<UserBankAccount>;
}
