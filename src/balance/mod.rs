//! Balance module - cash position and deposit/withdrawal recording.

mod balance_model;
mod balance_service;
mod balance_traits;

pub use balance_model::{Balance, CashActivity, CashActivityKind, CashFigures};
pub use balance_service::BalanceService;
pub use balance_traits::BalanceServiceTrait;
