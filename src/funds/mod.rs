//! Funds module - fund catalog, positions, and the holding join.

mod funds_constants;
mod funds_model;
mod funds_repository;
mod funds_service;
mod funds_traits;

// Re-export the public interface
pub use funds_constants::*;
pub use funds_model::{gain_percent, Fund, FundHolding, FundType, Position};
pub use funds_repository::{FundRepository, PositionRepository};
pub use funds_service::FundService;
pub use funds_traits::{FundRepositoryTrait, FundServiceTrait, PositionRepositoryTrait};

#[cfg(test)]
mod funds_model_tests;
