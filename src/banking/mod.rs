//! Banking module - registered bank accounts for funding.

mod banking_model;
mod banking_repository;
mod banking_service;
mod banking_traits;

pub use banking_model::{BankAccount, BankAccountType, NewBankAccount, UserBankAccount};
pub use banking_repository::BankAccountRepository;
pub use banking_service::BankingService;
pub use banking_traits::{BankAccountRepositoryTrait, BankingServiceTrait};
