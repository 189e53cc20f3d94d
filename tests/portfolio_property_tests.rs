//! Property-based tests for portfolio aggregation and series generation.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use teneo_core::balance::{BalanceService, CashFigures};
use teneo_core::funds::{
    Fund, FundRepository, FundService, FundServiceTrait, FundType, Position, PositionRepository,
};
use teneo_core::portfolio::series_generator::{generate_daily_series, Checkpoint};
use teneo_core::portfolio::{
    AllocationService, AllocationServiceTrait, SummaryService, SummaryServiceTrait,
};

// =============================================================================
// Generators
// =============================================================================

/// Generates a random fund type.
fn arb_fund_type() -> impl Strategy<Value = FundType> {
    prop_oneof![
        Just(FundType::EquityLongShort),
        Just(FundType::GlobalMacro),
        Just(FundType::EventDriven),
        Just(FundType::PrivateCredit),
    ]
}

/// Generates (fund_type, risk, book_value, current_value) tuples; ids are
/// assigned positionally when the portfolio is built.
fn arb_holdings(max_count: usize) -> impl Strategy<Value = Vec<(FundType, u8, i64, i64)>> {
    proptest::collection::vec(
        (
            arb_fund_type(),
            1u8..=5,
            1i64..1_000_000_000,
            0i64..1_000_000_000,
        ),
        0..=max_count,
    )
}

/// Builds a seeded fund service where every fund has a position.
fn fund_service(holdings: &[(FundType, u8, i64, i64)]) -> Arc<FundService> {
    let mut funds = Vec::new();
    let mut positions = Vec::new();
    for (i, (fund_type, risk, book, current)) in holdings.iter().enumerate() {
        let id = i.to_string();
        funds.push(Fund {
            id: id.clone(),
            name: format!("Fund {}", id),
            fund_type: *fund_type,
            risk: *risk,
            currency: "JPY".to_string(),
            min_investment: dec!(1_000_000),
            description: String::new(),
            features: Vec::new(),
        });
        positions.push(Position::new(
            id,
            dec!(100),
            Decimal::from(*book),
            Decimal::from(*current),
        ));
    }
    Arc::new(FundService::new(
        Arc::new(FundRepository::new(funds).unwrap()),
        Arc::new(PositionRepository::new(positions)),
    ))
}

fn summary_service(fund_service: Arc<FundService>) -> SummaryService {
    let balance = Arc::new(BalanceService::new(
        fund_service.clone(),
        CashFigures {
            available_balance: dec!(1_000_000),
            pending_deposit: Decimal::ZERO,
            pending_withdraw: Decimal::ZERO,
            reserved_amount: Decimal::ZERO,
        },
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    ));
    SummaryService::new(fund_service, balance)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Total gain always equals the sum of per-position gains.
    #[test]
    fn prop_total_gain_sums_position_gains(holdings in arb_holdings(16)) {
        let expected: Decimal = holdings
            .iter()
            .map(|(_, _, book, current)| Decimal::from(*current) - Decimal::from(*book))
            .sum();

        let summary = summary_service(fund_service(&holdings))
            .portfolio_summary()
            .unwrap();

        prop_assert_eq!(summary.total_gain, expected);
    }

    /// The join never invents records, and every joined id matches.
    #[test]
    fn prop_join_is_bounded_and_consistent(
        holdings in arb_holdings(12),
        held_mask in proptest::collection::vec(any::<bool>(), 12),
        orphan_count in 0usize..4,
    ) {
        let mut funds = Vec::new();
        let mut positions = Vec::new();
        for (i, (fund_type, risk, book, current)) in holdings.iter().enumerate() {
            funds.push(Fund {
                id: i.to_string(),
                name: format!("Fund {}", i),
                fund_type: *fund_type,
                risk: *risk,
                currency: "JPY".to_string(),
                min_investment: dec!(1_000_000),
                description: String::new(),
                features: Vec::new(),
            });
            if held_mask.get(i).copied().unwrap_or(false) {
                positions.push(Position::new(
                    i.to_string(),
                    dec!(1),
                    Decimal::from(*book),
                    Decimal::from(*current),
                ));
            }
        }
        // Positions referencing funds missing from the catalog.
        for i in 0..orphan_count {
            positions.push(Position::new(
                format!("orphan-{}", i),
                dec!(1),
                dec!(100),
                dec!(100),
            ));
        }

        let service = FundService::new(
            Arc::new(FundRepository::new(funds.clone()).unwrap()),
            Arc::new(PositionRepository::new(positions.clone())),
        );
        let joined = service.all_funds_with_positions().unwrap();

        prop_assert!(joined.len() <= funds.len().min(positions.len()));
        for holding in &joined {
            prop_assert_eq!(&holding.fund.id, &holding.position.fund_id);
        }
    }

    /// Allocation percentages sum to 100 (within rounding) when anything
    /// is held.
    #[test]
    fn prop_allocation_percentages_sum_to_100(holdings in arb_holdings(16)) {
        // Zero-value portfolios have no meaningful percentages.
        let total: i64 = holdings.iter().map(|(_, _, _, current)| *current).sum();
        prop_assume!(total > 0);

        let allocations = AllocationService::new(fund_service(&holdings))
            .portfolio_allocations()
            .unwrap();

        let type_sum: Decimal = allocations.by_type.iter().map(|a| a.percentage).sum();
        let risk_sum: Decimal = allocations.by_risk.iter().map(|a| a.percentage).sum();

        // Each group rounds to 2 dp, so allow half a unit in the last
        // place per group.
        let type_eps = Decimal::new(allocations.by_type.len() as i64, 2);
        let risk_eps = Decimal::new(allocations.by_risk.len() as i64, 2);
        prop_assert!((type_sum - dec!(100)).abs() <= type_eps, "{}", type_sum);
        prop_assert!((risk_sum - dec!(100)).abs() <= risk_eps, "{}", risk_sum);
    }

    /// Generated series are pinned to their endpoints for any seed,
    /// range, and value pair.
    #[test]
    fn prop_series_endpoints_are_pinned(
        seed in any::<u64>(),
        days in 1i64..400,
        start in 1i64..1_000_000_000,
        end in 1i64..1_000_000_000,
    ) {
        let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end_date = start_date + Duration::days(days);
        let mut rng = StdRng::seed_from_u64(seed);

        let points = generate_daily_series(
            start_date,
            end_date,
            Decimal::from(start),
            Decimal::from(end),
            &[],
            &mut rng,
        )
        .unwrap();

        prop_assert_eq!(points.len() as i64, days + 1);
        prop_assert_eq!(points.first().unwrap().total_assets, Decimal::from(start));
        prop_assert_eq!(points.last().unwrap().total_assets, Decimal::from(end));
    }

    /// Principal only ever changes on a checkpoint date.
    #[test]
    fn prop_principal_changes_only_at_checkpoints(
        seed in any::<u64>(),
        checkpoint_offsets in proptest::collection::btree_set(1i64..180, 0..5),
    ) {
        let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end_date = start_date + Duration::days(180);

        // Principal grows by a fixed amount at each checkpoint.
        let checkpoints: Vec<Checkpoint> = checkpoint_offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| Checkpoint {
                date: start_date + Duration::days(*offset),
                principal: dec!(1_000_000) + Decimal::from(i as i64 + 1) * dec!(50_000),
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        let points = generate_daily_series(
            start_date,
            end_date,
            dec!(1_000_000),
            dec!(1_500_000),
            &checkpoints,
            &mut rng,
        )
        .unwrap();

        for pair in points.windows(2) {
            let changed = pair[1].principal != pair[0].principal;
            let is_checkpoint = checkpoints.iter().any(|c| c.date == pair[1].date);
            prop_assert!(!changed || is_checkpoint, "changed on {}", pair[1].date);
            prop_assert!(pair[1].principal >= pair[0].principal);
        }
    }
}
