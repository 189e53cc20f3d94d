//! In-memory user bank-account store.

use std::sync::RwLock;

use super::banking_model::UserBankAccount;
use super::banking_traits::BankAccountRepositoryTrait;
use crate::errors::Result;
use crate::Error;

/// Seeded account store plus any accounts registered this session.
pub struct BankAccountRepository {
    accounts: RwLock<Vec<UserBankAccount>>,
}

impl BankAccountRepository {
    pub fn new(accounts: Vec<UserBankAccount>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

impl BankAccountRepositoryTrait for BankAccountRepository {
    fn list(&self) -> Result<Vec<UserBankAccount>> {
        Ok(self.accounts.read().unwrap().clone())
    }

    fn get_by_id(&self, account_id: &str) -> Result<UserBankAccount> {
        self.accounts
            .read()
            .unwrap()
            .iter()
            .find(|a| a.account.id == account_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Bank account {}", account_id)))
    }

    fn add(&self, account: UserBankAccount) -> Result<UserBankAccount> {
        let mut accounts = self.accounts.write().unwrap();
        if account.is_default {
            for existing in accounts.iter_mut() {
                existing.is_default = false;
            }
        }
        accounts.push(account.clone());
        Ok(account)
    }

    fn set_default(&self, account_id: &str) -> Result<UserBankAccount> {
        let mut accounts = self.accounts.write().unwrap();
        if !accounts.iter().any(|a| a.account.id == account_id) {
            return Err(Error::NotFound(format!("Bank account {}", account_id)));
        }

        let mut updated = None;
        for account in accounts.iter_mut() {
            account.is_default = account.account.id == account_id;
            if account.is_default {
                updated = Some(account.clone());
            }
        }
        // The existence check above guarantees a match.
        updated.ok_or_else(|| Error::Unexpected("Default account vanished".to_string()))
    }
}
