//! Unit tests for the history service.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::sync::Arc;

use super::history_model::HistoryPeriod;
use super::history_service::{HistoryService, HistoryServiceTrait};
use crate::balance::{BalanceService, CashFigures};
use crate::funds::{Fund, FundRepository, FundService, FundType, Position, PositionRepository};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
}

fn history_service(seed: u64) -> HistoryService {
    let funds = vec![
        Fund {
            id: "1".to_string(),
            name: "Fund 1".to_string(),
            fund_type: FundType::EquityLongShort,
            risk: 4,
            currency: "JPY".to_string(),
            min_investment: dec!(1_000_000),
            description: String::new(),
            features: Vec::new(),
        },
        Fund {
            id: "2".to_string(),
            name: "Fund 2".to_string(),
            fund_type: FundType::GlobalMacro,
            risk: 4,
            currency: "JPY".to_string(),
            min_investment: dec!(1_000_000),
            description: String::new(),
            features: Vec::new(),
        },
    ];
    let positions = vec![
        Position::new("1", dec!(100), dec!(1_000_000), dec!(1_280_000)),
        Position::new("2", dec!(80), dec!(800_000), dec!(880_000)),
    ];

    let fund_service = Arc::new(FundService::new(
        Arc::new(FundRepository::new(funds).unwrap()),
        Arc::new(PositionRepository::new(positions)),
    ));
    let balance_service = Arc::new(BalanceService::new(
        fund_service.clone(),
        CashFigures {
            available_balance: dec!(1_000_000),
            pending_deposit: dec!(0),
            pending_withdraw: dec!(0),
            reserved_amount: dec!(0),
        },
        as_of(),
    ));

    HistoryService::new(fund_service, balance_service, as_of(), seed)
}

#[test]
fn every_period_has_one_point_per_day() {
    let history = history_service(11).portfolio_history().unwrap();

    for period in HistoryPeriod::ALL_PERIODS {
        let series = history.for_period(period);
        assert_eq!(series.len() as i64, period.days() + 1, "{}", period.label());
    }
}

#[test]
fn series_end_at_the_live_totals() {
    let history = history_service(11).portfolio_history().unwrap();

    for period in HistoryPeriod::ALL_PERIODS {
        let last = history.for_period(period).last().unwrap();
        assert_eq!(last.date, as_of());
        assert_eq!(last.total_assets, dec!(2_160_000), "{}", period.label());
        assert_eq!(last.principal, dec!(1_800_000), "{}", period.label());
        assert_eq!(last.cash, dec!(1_000_000), "{}", period.label());
    }
}

#[test]
fn principal_only_rises_and_only_at_checkpoints() {
    let history = history_service(11).portfolio_history().unwrap();

    for period in HistoryPeriod::ALL_PERIODS {
        let series = history.for_period(period);
        for pair in series.windows(2) {
            assert!(
                pair[1].principal >= pair[0].principal,
                "principal dipped in {}",
                period.label()
            );
        }
    }
}

#[test]
fn history_is_deterministic_across_calls() {
    let service = history_service(11);

    let first = service.portfolio_history().unwrap();
    let second = service.portfolio_history().unwrap();

    for period in HistoryPeriod::ALL_PERIODS {
        assert_eq!(first.for_period(period), second.for_period(period));
    }
}

#[test]
fn periods_use_independent_walks() {
    let history = history_service(11).portfolio_history().unwrap();

    // Same span, different walks: the 1M window and the tail of the 3M
    // window cover the same dates but are generated independently.
    let one_month = history.for_period(HistoryPeriod::OneMonth);
    let three_months = history.for_period(HistoryPeriod::ThreeMonths);
    let tail = &three_months[three_months.len() - one_month.len()..];
    assert_ne!(one_month, tail);
}
