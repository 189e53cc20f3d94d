//! Seed dataset for the dashboard.
//!
//! Everything the repositories serve is constructed here from literals;
//! nothing is fetched or persisted. `DashboardContext` wires these into
//! the services at startup.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::balance::CashFigures;
use crate::banking::{BankAccount, BankAccountType, UserBankAccount};
use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::funds::{Fund, FundType, Position};
use crate::portfolio::{FundPerformancePoint, PeriodPerformance, PerformancePeriod};
use crate::transactions::{Transaction, TransactionKind, TransactionStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed literals are static and always in range.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// The fund catalog.
pub fn funds() -> Vec<Fund> {
    vec![
        Fund {
            id: "1".to_string(),
            name: "Global Equity Long/Short Fund".to_string(),
            fund_type: FundType::EquityLongShort,
            risk: 4,
            currency: DEFAULT_BASE_CURRENCY.to_string(),
            min_investment: dec!(1_000_000),
            description: "Pairs longs in undervalued names with shorts in overvalued \
                          ones across global equity markets, targeting steady returns \
                          with low market sensitivity."
                .to_string(),
            features: vec![
                "Market-neutral strategy".to_string(),
                "Global diversification".to_string(),
                "Strict risk controls".to_string(),
                "Monthly dealing".to_string(),
            ],
        },
        Fund {
            id: "2".to_string(),
            name: "Asia Equity Long/Short Fund".to_string(),
            fund_type: FundType::EquityLongShort,
            risk: 5,
            currency: DEFAULT_BASE_CURRENCY.to_string(),
            min_investment: dec!(1_000_000),
            description: "Goes long high-growth Asian names and short structurally \
                          challenged ones, aiming for high returns."
                .to_string(),
            features: vec![
                "Asia-market focus".to_string(),
                "Active management".to_string(),
                "High-return oriented".to_string(),
                "Quarterly dealing".to_string(),
            ],
        },
        Fund {
            id: "3".to_string(),
            name: "Global Macro Fund".to_string(),
            fund_type: FundType::GlobalMacro,
            risk: 4,
            currency: DEFAULT_BASE_CURRENCY.to_string(),
            min_investment: dec!(30_000_000),
            description: "Builds positions across currencies, rates, and equity \
                          indices from macroeconomic analysis, shifting allocation \
                          with market conditions."
                .to_string(),
            features: vec![
                "Multi-asset strategy".to_string(),
                "Trend analysis".to_string(),
                "Tactical allocation".to_string(),
                "Monthly dealing".to_string(),
            ],
        },
        Fund {
            id: "4".to_string(),
            name: "Merger Arbitrage Fund".to_string(),
            fund_type: FundType::EventDriven,
            risk: 3,
            currency: DEFAULT_BASE_CURRENCY.to_string(),
            min_investment: dec!(50_000_000),
            description: "Captures price spreads between securities around M&A and \
                          corporate restructuring events."
                .to_string(),
            features: vec![
                "Low-correlation strategy".to_string(),
                "Event investing".to_string(),
                "Risk-contained".to_string(),
                "Quarterly dealing".to_string(),
            ],
        },
        Fund {
            id: "5".to_string(),
            name: "Private Credit Fund".to_string(),
            fund_type: FundType::PrivateCredit,
            risk: 4,
            currency: "USD".to_string(),
            min_investment: dec!(100_000_000),
            description: "Direct lending to private companies and mezzanine finance, \
                          targeting returns above traditional bond investing."
                .to_string(),
            features: vec![
                "Yield-seeking".to_string(),
                "Long-term investing".to_string(),
                "Diversified lending".to_string(),
                "Quarterly dealing".to_string(),
            ],
        },
    ]
}

/// The user's positions, one per held fund.
pub fn positions() -> Vec<Position> {
    vec![
        Position::new("1", dec!(100), dec!(1_000_000), dec!(1_280_000)),
        Position::new("2", dec!(80), dec!(800_000), dec!(920_000)),
        Position::new("3", dec!(150), dec!(1_500_000), dec!(1_650_000)),
        Position::new("4", dec!(50), dec!(500_000), dec!(525_000)),
        Position::new("5", dec!(200), dec!(2_000_000), dec!(2_300_000)),
    ]
}

/// Cash figures behind the balance screen.
pub fn cash_figures() -> CashFigures {
    CashFigures {
        available_balance: dec!(3_500_000),
        pending_deposit: dec!(1_000_000),
        pending_withdraw: dec!(500_000),
        reserved_amount: dec!(1_500_000),
    }
}

/// The firm's deposit account shown on the funding screen.
pub fn company_bank_account() -> BankAccount {
    BankAccount {
        id: "company-1".to_string(),
        bank_name: "Sakura Bank".to_string(),
        branch_name: "Head Office".to_string(),
        account_type: BankAccountType::Ordinary,
        account_number: "1234567".to_string(),
        account_name: "Teneo Inc.".to_string(),
    }
}

/// The user's registered bank accounts.
pub fn user_bank_accounts() -> Vec<UserBankAccount> {
    vec![
        UserBankAccount {
            account: BankAccount {
                id: "user-1".to_string(),
                bank_name: "Mizuho Bank".to_string(),
                branch_name: "Shibuya".to_string(),
                account_type: BankAccountType::Ordinary,
                account_number: "1234567".to_string(),
                account_name: "Taro Yamada".to_string(),
            },
            is_default: true,
            verified: true,
            last_used: Some(date(2024, 3, 15)),
        },
        UserBankAccount {
            account: BankAccount {
                id: "user-2".to_string(),
                bank_name: "MUFG Bank".to_string(),
                branch_name: "Shinjuku".to_string(),
                account_type: BankAccountType::Ordinary,
                account_number: "7654321".to_string(),
                account_name: "Taro Yamada".to_string(),
            },
            is_default: false,
            verified: true,
            last_used: Some(date(2024, 2, 20)),
        },
    ]
}

/// Past orders shown on the transaction-history screen.
pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "t-1".to_string(),
            fund_id: "1".to_string(),
            kind: TransactionKind::Purchase,
            status: TransactionStatus::Completed,
            amount: dec!(1_000_000),
            units: Some(dec!(100)),
            date: date(2024, 1, 15),
            settlement_date: Some(date(2024, 1, 19)),
        },
        Transaction {
            id: "t-2".to_string(),
            fund_id: "3".to_string(),
            kind: TransactionKind::Purchase,
            status: TransactionStatus::Completed,
            amount: dec!(1_500_000),
            units: Some(dec!(150)),
            date: date(2024, 2, 1),
            settlement_date: Some(date(2024, 2, 6)),
        },
        Transaction {
            id: "t-3".to_string(),
            fund_id: "2".to_string(),
            kind: TransactionKind::Redemption,
            status: TransactionStatus::Rejected,
            amount: dec!(200_000),
            units: Some(dec!(20)),
            date: date(2024, 2, 22),
            settlement_date: None,
        },
        Transaction {
            id: "t-4".to_string(),
            fund_id: "5".to_string(),
            kind: TransactionKind::Purchase,
            status: TransactionStatus::Pending,
            amount: dec!(2_000_000),
            units: None,
            date: date(2024, 3, 28),
            settlement_date: None,
        },
    ]
}

fn series(fund_id: &str, rows: &[(i32, u32, Decimal, Option<Decimal>)]) -> (String, Vec<FundPerformancePoint>) {
    (
        fund_id.to_string(),
        rows.iter()
            .map(|(y, m, value, benchmark)| FundPerformancePoint {
                month: date(*y, *m, 1),
                value: *value,
                benchmark: *benchmark,
            })
            .collect(),
    )
}

/// Monthly index series per fund (launch = 100).
pub fn fund_performance() -> HashMap<String, Vec<FundPerformancePoint>> {
    HashMap::from([
        series(
            "1",
            &[
                (2023, 4, dec!(100.0), None),
                (2023, 5, dec!(102.5), None),
                (2023, 6, dec!(105.8), None),
                (2023, 7, dec!(108.2), None),
                (2023, 8, dec!(110.4), None),
                (2023, 9, dec!(112.6), None),
                (2023, 10, dec!(114.2), None),
                (2023, 11, dec!(115.5), None),
                (2023, 12, dec!(116.8), None),
                (2024, 1, dec!(118.2), None),
                (2024, 2, dec!(119.0), None),
                (2024, 3, dec!(120.5), None),
            ],
        ),
        series(
            "2",
            &[
                (2023, 4, dec!(100.0), Some(dec!(100.0))),
                (2023, 5, dec!(103.5), Some(dec!(101.5))),
                (2023, 6, dec!(107.2), Some(dec!(103.2))),
                (2023, 7, dec!(110.8), Some(dec!(104.8))),
                (2023, 8, dec!(108.6), Some(dec!(103.5))),
                (2023, 9, dec!(106.2), Some(dec!(102.8))),
                (2023, 10, dec!(109.5), Some(dec!(104.2))),
                (2023, 11, dec!(112.8), Some(dec!(105.6))),
                (2023, 12, dec!(115.4), Some(dec!(106.8))),
                (2024, 1, dec!(108.2), Some(dec!(104.5))),
                (2024, 2, dec!(110.0), Some(dec!(105.2))),
                (2024, 3, dec!(111.2), Some(dec!(105.8))),
            ],
        ),
        series(
            "3",
            &[
                (2023, 4, dec!(100.0), Some(dec!(100.0))),
                (2023, 5, dec!(101.8), Some(dec!(100.8))),
                (2023, 6, dec!(104.2), Some(dec!(101.5))),
                (2023, 7, dec!(106.5), Some(dec!(102.2))),
                (2023, 8, dec!(108.8), Some(dec!(103.0))),
                (2023, 9, dec!(110.2), Some(dec!(103.8))),
                (2023, 10, dec!(112.5), Some(dec!(104.5))),
                (2023, 11, dec!(114.8), Some(dec!(105.2))),
                (2023, 12, dec!(116.2), Some(dec!(105.8))),
                (2024, 1, dec!(108.5), Some(dec!(104.2))),
                (2024, 2, dec!(110.0), Some(dec!(104.8))),
                (2024, 3, dec!(111.5), Some(dec!(105.5))),
            ],
        ),
        series(
            "4",
            &[
                (2023, 4, dec!(100.0), Some(dec!(100.0))),
                (2023, 5, dec!(101.2), Some(dec!(100.5))),
                (2023, 6, dec!(102.5), Some(dec!(101.2))),
                (2023, 7, dec!(103.8), Some(dec!(101.8))),
                (2023, 8, dec!(104.5), Some(dec!(102.2))),
                (2023, 9, dec!(105.2), Some(dec!(102.8))),
                (2023, 10, dec!(106.0), Some(dec!(103.2))),
                (2023, 11, dec!(106.8), Some(dec!(103.8))),
                (2023, 12, dec!(107.5), Some(dec!(104.2))),
                (2024, 1, dec!(108.2), Some(dec!(104.8))),
                (2024, 2, dec!(108.8), Some(dec!(105.2))),
                (2024, 3, dec!(109.5), Some(dec!(105.8))),
            ],
        ),
        series(
            "5",
            &[
                (2023, 4, dec!(100.0), Some(dec!(100.0))),
                (2023, 5, dec!(102.2), Some(dec!(100.8))),
                (2023, 6, dec!(104.5), Some(dec!(101.5))),
                (2023, 7, dec!(106.8), Some(dec!(102.2))),
                (2023, 8, dec!(109.2), Some(dec!(103.0))),
                (2023, 9, dec!(111.5), Some(dec!(103.8))),
                (2023, 10, dec!(113.8), Some(dec!(104.5))),
                (2023, 11, dec!(116.2), Some(dec!(105.2))),
                (2023, 12, dec!(118.5), Some(dec!(105.8))),
                (2024, 1, dec!(120.8), Some(dec!(106.5))),
                (2024, 2, dec!(123.2), Some(dec!(107.2))),
                (2024, 3, dec!(125.5), Some(dec!(108.0))),
            ],
        ),
    ])
}

/// Benchmark display names per fund.
pub fn benchmarks() -> HashMap<String, String> {
    HashMap::from([
        ("1".to_string(), "MSCI World Index".to_string()),
        ("2".to_string(), "MSCI Asia Index".to_string()),
        ("3".to_string(), "Global Macro Index".to_string()),
        ("4".to_string(), "Event Driven Index".to_string()),
        ("5".to_string(), "Private Credit Index".to_string()),
    ])
}

/// Portfolio-level performance table rows.
pub fn performance_summary() -> Vec<PeriodPerformance> {
    let row = |period, return_pct, risk_pct, sharpe| PeriodPerformance {
        period,
        return_pct,
        risk_pct,
        sharpe,
    };
    vec![
        row(PerformancePeriod::OneMonth, dec!(2.5), dec!(12.3), dec!(0.8)),
        row(PerformancePeriod::ThreeMonths, dec!(5.8), dec!(11.8), dec!(1.2)),
        row(PerformancePeriod::SixMonths, dec!(8.2), dec!(11.5), dec!(1.4)),
        row(PerformancePeriod::OneYear, dec!(15.2), dec!(12.1), dec!(1.6)),
        row(PerformancePeriod::ThreeYears, dec!(45.5), dec!(13.2), dec!(1.8)),
        row(PerformancePeriod::FiveYears, dec!(82.3), dec!(12.8), dec!(1.9)),
        row(PerformancePeriod::Inception, dec!(120.5), dec!(13.5), dec!(1.7)),
    ]
}

/// The dashboard's valuation anchor: the date the seed data describes.
pub fn as_of_date() -> NaiveDate {
    date(2024, 3, 31)
}
