//! Portfolio allocation module for type and risk breakdowns.

mod allocation_model;
mod allocation_service;

pub use allocation_model::{PortfolioAllocations, RiskAllocation, TypeAllocation};
pub use allocation_service::{AllocationService, AllocationServiceTrait};

#[cfg(test)]
mod allocation_service_tests;
