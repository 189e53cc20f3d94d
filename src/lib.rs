//! Teneo Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the Teneo fund
//! dashboard. It is presentation-agnostic: repositories hold seeded
//! in-memory data, and services expose the pure, synchronous surface
//! the view layer renders.

pub mod balance;
pub mod banking;
pub mod constants;
pub mod context;
pub mod errors;
pub mod funds;
pub mod onboarding;
pub mod portfolio;
pub mod seed;
pub mod transactions;

// Re-export common types from the fund and portfolio modules
pub use funds::*;
pub use portfolio::*;

pub use context::DashboardContext;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
