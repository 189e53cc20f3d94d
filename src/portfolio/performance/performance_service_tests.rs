//! Unit tests for the performance service.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::performance_model::{FundPerformancePoint, PeriodPerformance, PerformancePeriod};
use super::performance_service::{PerformanceService, PerformanceServiceTrait};

fn service() -> PerformanceService {
    let mut series = HashMap::new();
    series.insert(
        "1".to_string(),
        vec![
            FundPerformancePoint {
                month: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
                value: dec!(100.0),
                benchmark: Some(dec!(100.0)),
            },
            FundPerformancePoint {
                month: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
                value: dec!(102.5),
                benchmark: Some(dec!(101.5)),
            },
        ],
    );
    let mut benchmarks = HashMap::new();
    benchmarks.insert("1".to_string(), "MSCI World Index".to_string());

    PerformanceService::new(
        series,
        benchmarks,
        vec![PeriodPerformance {
            period: PerformancePeriod::OneYear,
            return_pct: dec!(15.2),
            risk_pct: dec!(12.1),
            sharpe: dec!(1.6),
        }],
    )
}

#[test]
fn known_fund_returns_series_and_benchmark() {
    let response = service().fund_performance("1").unwrap();

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.benchmark.as_deref(), Some("MSCI World Index"));
    assert_eq!(response.data[0].value, dec!(100.0));
}

#[test]
fn unknown_fund_returns_empty_series() {
    let response = service().fund_performance("missing").unwrap();

    assert!(response.data.is_empty());
    assert_eq!(response.benchmark, None);
}

#[test]
fn summary_rows_come_back_verbatim() {
    let summary = service().performance_summary().unwrap();

    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].period, PerformancePeriod::OneYear);
    assert_eq!(summary[0].period.label(), "1 year");
}
