//! Transactions module - purchase/redemption orders and their history.

mod transactions_model;
mod transactions_repository;
mod transactions_service;
mod transactions_traits;

pub use transactions_model::{
    Transaction, TransactionFilter, TransactionKind, TransactionStatus,
};
pub use transactions_repository::TransactionRepository;
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
