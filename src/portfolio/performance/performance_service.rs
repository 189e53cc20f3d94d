//! Service serving fund performance series and the period table.

use log::debug;
use std::collections::HashMap;

use super::performance_model::{
    FundPerformancePoint, FundPerformanceResponse, PeriodPerformance,
};
use crate::errors::Result;

/// Trait for the performance service.
pub trait PerformanceServiceTrait: Send + Sync {
    /// A fund's monthly index series and benchmark name.
    ///
    /// Unknown funds yield an empty series with no benchmark; the fund
    /// detail view renders its own fallback.
    fn fund_performance(&self, fund_id: &str) -> Result<FundPerformanceResponse>;

    /// Portfolio-level performance rows per reporting window.
    fn performance_summary(&self) -> Result<Vec<PeriodPerformance>>;
}

/// Service over the seeded performance tables.
pub struct PerformanceService {
    series: HashMap<String, Vec<FundPerformancePoint>>,
    benchmarks: HashMap<String, String>,
    summary: Vec<PeriodPerformance>,
}

impl PerformanceService {
    /// Creates a new PerformanceService instance over seeded tables.
    pub fn new(
        series: HashMap<String, Vec<FundPerformancePoint>>,
        benchmarks: HashMap<String, String>,
        summary: Vec<PeriodPerformance>,
    ) -> Self {
        Self {
            series,
            benchmarks,
            summary,
        }
    }
}

impl PerformanceServiceTrait for PerformanceService {
    fn fund_performance(&self, fund_id: &str) -> Result<FundPerformanceResponse> {
        let data = self.series.get(fund_id).cloned().unwrap_or_default();
        let benchmark = self.benchmarks.get(fund_id).cloned();
        if data.is_empty() {
            debug!("No performance series for fund {}", fund_id);
        }
        Ok(FundPerformanceResponse { data, benchmark })
    }

    fn performance_summary(&self) -> Result<Vec<PeriodPerformance>> {
        Ok(self.summary.clone())
    }
}
