//! Unit tests for the allocation service.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use super::allocation_service::{AllocationService, AllocationServiceTrait};
use crate::funds::{Fund, FundRepository, FundService, FundType, Position, PositionRepository};

fn fund(id: &str, fund_type: FundType, risk: u8) -> Fund {
    Fund {
        id: id.to_string(),
        name: format!("Fund {}", id),
        fund_type,
        risk,
        currency: "JPY".to_string(),
        min_investment: dec!(1_000_000),
        description: String::new(),
        features: Vec::new(),
    }
}

fn allocation_service(funds: Vec<Fund>, positions: Vec<Position>) -> AllocationService {
    AllocationService::new(Arc::new(FundService::new(
        Arc::new(FundRepository::new(funds).unwrap()),
        Arc::new(PositionRepository::new(positions)),
    )))
}

fn seeded_service() -> AllocationService {
    allocation_service(
        vec![
            fund("1", FundType::EquityLongShort, 4),
            fund("2", FundType::EquityLongShort, 5),
            fund("3", FundType::GlobalMacro, 4),
            fund("4", FundType::EventDriven, 3),
        ],
        vec![
            Position::new("1", dec!(100), dec!(1_000_000), dec!(1_280_000)),
            Position::new("2", dec!(80), dec!(800_000), dec!(920_000)),
            Position::new("3", dec!(150), dec!(1_500_000), dec!(1_650_000)),
            Position::new("4", dec!(50), dec!(500_000), dec!(525_000)),
        ],
    )
}

#[test]
fn groups_are_in_first_occurrence_order() {
    let allocations = seeded_service().portfolio_allocations().unwrap();

    let types: Vec<FundType> = allocations.by_type.iter().map(|a| a.fund_type).collect();
    assert_eq!(
        types,
        vec![
            FundType::EquityLongShort,
            FundType::GlobalMacro,
            FundType::EventDriven,
        ]
    );

    let risks: Vec<u8> = allocations.by_risk.iter().map(|a| a.risk).collect();
    assert_eq!(risks, vec![4, 5, 3]);
}

#[test]
fn group_values_sum_positions() {
    let allocations = seeded_service().portfolio_allocations().unwrap();

    // Both equity long/short positions fold into one group.
    assert_eq!(allocations.by_type[0].value, dec!(2_200_000));
    assert_eq!(allocations.total_value, dec!(4_375_000));

    // Risk 4 collects funds 1 and 3.
    assert_eq!(allocations.by_risk[0].value, dec!(2_930_000));
}

#[test]
fn percentages_sum_to_one_hundred() {
    let allocations = seeded_service().portfolio_allocations().unwrap();

    let type_total: Decimal = allocations.by_type.iter().map(|a| a.percentage).sum();
    let risk_total: Decimal = allocations.by_risk.iter().map(|a| a.percentage).sum();

    let epsilon = dec!(0.05);
    assert!((type_total - dec!(100)).abs() <= epsilon, "{}", type_total);
    assert!((risk_total - dec!(100)).abs() <= epsilon, "{}", risk_total);
}

#[test]
fn empty_portfolio_yields_empty_groupings() {
    let allocations = allocation_service(Vec::new(), Vec::new())
        .portfolio_allocations()
        .unwrap();

    assert!(allocations.by_type.is_empty());
    assert!(allocations.by_risk.is_empty());
    assert_eq!(allocations.total_value, Decimal::ZERO);
}
