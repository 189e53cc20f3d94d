//! Fund performance module.

mod performance_model;
mod performance_service;

pub use performance_model::{
    FundPerformancePoint, FundPerformanceResponse, PeriodPerformance, PerformancePeriod,
};
pub use performance_service::{PerformanceService, PerformanceServiceTrait};

#[cfg(test)]
mod performance_service_tests;
