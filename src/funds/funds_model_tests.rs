//! Unit tests for fund and position models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::funds_model::{gain_percent, Fund, FundHolding, FundType, Position};

fn sample_fund() -> Fund {
    Fund {
        id: "1".to_string(),
        name: "Global Equity Long/Short Fund".to_string(),
        fund_type: FundType::EquityLongShort,
        risk: 4,
        currency: "JPY".to_string(),
        min_investment: dec!(1_000_000),
        description: "Market-neutral global equity strategy".to_string(),
        features: vec!["Market neutral".to_string()],
    }
}

#[test]
fn position_derives_gain_fields() {
    let position = Position::new("1", dec!(100), dec!(1_000_000), dec!(1_280_000));

    assert_eq!(position.unrealized_gain, dec!(280_000));
    assert_eq!(position.unrealized_gain_percent, dec!(28.00));
}

#[test]
fn position_gain_can_be_negative() {
    let position = Position::new("1", dec!(100), dec!(1_000_000), dec!(950_000));

    assert_eq!(position.unrealized_gain, dec!(-50_000));
    assert_eq!(position.unrealized_gain_percent, dec!(-5.00));
}

#[test]
fn gain_percent_is_zero_on_zero_basis() {
    assert_eq!(gain_percent(dec!(100), Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn fund_validation_rejects_bad_risk_score() {
    let mut fund = sample_fund();
    fund.risk = 6;
    assert!(fund.validate().is_err());

    fund.risk = 0;
    assert!(fund.validate().is_err());

    fund.risk = 5;
    assert!(fund.validate().is_ok());
}

#[test]
fn fund_validation_rejects_empty_name() {
    let mut fund = sample_fund();
    fund.name = "  ".to_string();
    assert!(fund.validate().is_err());
}

#[test]
fn holding_serializes_as_a_flat_merged_record() {
    let holding = FundHolding::join(
        sample_fund(),
        Position::new("1", dec!(100), dec!(1_000_000), dec!(1_280_000)),
    );

    let json = serde_json::to_value(&holding).unwrap();
    // One flat object: fund fields and position fields side by side.
    assert_eq!(json["id"], "1");
    assert_eq!(json["fundId"], "1");
    assert_eq!(json["fundType"], "EQUITY_LONG_SHORT");
    assert!(json.get("fund").is_none());
    assert!(json.get("position").is_none());
}
