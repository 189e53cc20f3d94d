use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::banking_model::{BankAccount, NewBankAccount, UserBankAccount};
use super::banking_traits::{BankAccountRepositoryTrait, BankingServiceTrait};
use crate::errors::Result;

/// Service for the user's registered bank accounts.
pub struct BankingService {
    repository: Arc<dyn BankAccountRepositoryTrait>,
    company_account: BankAccount,
}

impl BankingService {
    /// Creates a new BankingService instance.
    pub fn new(repository: Arc<dyn BankAccountRepositoryTrait>, company_account: BankAccount) -> Self {
        Self {
            repository,
            company_account,
        }
    }
}

impl BankingServiceTrait for BankingService {
    fn list_accounts(&self) -> Result<Vec<UserBankAccount>> {
        self.repository.list()
    }

    fn default_account(&self) -> Result<Option<UserBankAccount>> {
        Ok(self.repository.list()?.into_iter().find(|a| a.is_default))
    }

    fn company_deposit_account(&self) -> Result<BankAccount> {
        Ok(self.company_account.clone())
    }

    fn add_account(&self, new_account: NewBankAccount) -> Result<UserBankAccount> {
        new_account.validate()?;

        let is_first = self.repository.list()?.is_empty();
        let account = UserBankAccount {
            account: BankAccount {
                id: Uuid::new_v4().to_string(),
                bank_name: new_account.bank_name,
                branch_name: new_account.branch_name,
                account_type: new_account.account_type,
                account_number: new_account.account_number,
                account_name: new_account.account_name,
            },
            is_default: new_account.is_default || is_first,
            verified: false,
            last_used: None,
        };

        debug!("Registering bank account {}", account.account.id);
        self.repository.add(account)
    }

    fn set_default_account(&self, account_id: &str) -> Result<UserBankAccount> {
        self.repository.set_default(account_id)
    }
}
