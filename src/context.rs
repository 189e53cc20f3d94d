//! Service wiring for the dashboard.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::balance::{BalanceService, BalanceServiceTrait};
use crate::banking::{BankAccountRepository, BankingService, BankingServiceTrait};
use crate::errors::Result;
use crate::funds::{
    Fund, FundHolding, FundRepository, FundService, FundServiceTrait, PositionRepository,
};
use crate::portfolio::{
    AllocationService, AllocationServiceTrait, FundPerformanceResponse, HistoryService,
    HistoryServiceTrait, PerformanceService, PerformanceServiceTrait, PortfolioAllocations,
    PortfolioHistory, PortfolioSummary, SummaryService, SummaryServiceTrait,
};
use crate::seed;
use crate::transactions::{
    Transaction, TransactionFilter, TransactionRepository, TransactionService,
    TransactionServiceTrait,
};

/// Everything the presentation layer talks to, wired over the seed data.
///
/// The context owns one instance of each service; all of them share the
/// same repositories, so the headline numbers, charts, and forms always
/// agree with each other.
pub struct DashboardContext {
    fund_service: Arc<dyn FundServiceTrait>,
    summary_service: Arc<dyn SummaryServiceTrait>,
    history_service: Arc<dyn HistoryServiceTrait>,
    allocation_service: Arc<dyn AllocationServiceTrait>,
    performance_service: Arc<dyn PerformanceServiceTrait>,
    balance_service: Arc<dyn BalanceServiceTrait>,
    banking_service: Arc<dyn BankingServiceTrait>,
    transaction_service: Arc<dyn TransactionServiceTrait>,
}

impl DashboardContext {
    /// Builds the full service graph over the seed dataset.
    ///
    /// `as_of` anchors valuations and generated history; `history_seed`
    /// fixes the chart walks so repeated renders are identical.
    pub fn new(as_of: NaiveDate, history_seed: u64) -> Result<Self> {
        let fund_repository = Arc::new(FundRepository::new(seed::funds())?);
        let position_repository = Arc::new(PositionRepository::new(seed::positions()));
        let fund_service: Arc<dyn FundServiceTrait> =
            Arc::new(FundService::new(fund_repository, position_repository));

        let balance_service: Arc<dyn BalanceServiceTrait> = Arc::new(BalanceService::new(
            fund_service.clone(),
            seed::cash_figures(),
            as_of,
        ));

        let summary_service = Arc::new(SummaryService::new(
            fund_service.clone(),
            balance_service.clone(),
        ));
        let history_service = Arc::new(HistoryService::new(
            fund_service.clone(),
            balance_service.clone(),
            as_of,
            history_seed,
        ));
        let allocation_service = Arc::new(AllocationService::new(fund_service.clone()));
        let performance_service = Arc::new(PerformanceService::new(
            seed::fund_performance(),
            seed::benchmarks(),
            seed::performance_summary(),
        ));

        let banking_service = Arc::new(BankingService::new(
            Arc::new(BankAccountRepository::new(seed::user_bank_accounts())),
            seed::company_bank_account(),
        ));
        let transaction_service = Arc::new(TransactionService::new(
            Arc::new(TransactionRepository::new(seed::transactions())),
            fund_service.clone(),
            as_of,
        ));

        Ok(Self {
            fund_service,
            summary_service,
            history_service,
            allocation_service,
            performance_service,
            balance_service,
            banking_service,
            transaction_service,
        })
    }

    /// Context anchored to the seed dataset's own valuation date.
    pub fn with_seed_data() -> Result<Self> {
        Self::new(seed::as_of_date(), 0)
    }

    // === The surface the views render ===

    /// Headline totals for the dashboard cards.
    pub fn portfolio_summary(&self) -> Result<PortfolioSummary> {
        self.summary_service.portfolio_summary()
    }

    /// Every held fund joined with its position.
    pub fn all_funds_with_positions(&self) -> Result<Vec<FundHolding>> {
        self.fund_service.all_funds_with_positions()
    }

    /// One held fund joined with its position.
    pub fn fund_with_position(&self, fund_id: &str) -> Result<FundHolding> {
        self.fund_service.fund_with_position(fund_id)
    }

    /// The fund catalog.
    pub fn list_funds(&self) -> Result<Vec<Fund>> {
        self.fund_service.list_funds()
    }

    /// Asset-history chart data for every period.
    pub fn portfolio_history(&self) -> Result<PortfolioHistory> {
        self.history_service.portfolio_history()
    }

    /// Type and risk allocation chart data.
    pub fn portfolio_allocations(&self) -> Result<PortfolioAllocations> {
        self.allocation_service.portfolio_allocations()
    }

    /// A fund's performance series and benchmark name.
    pub fn fund_performance(&self, fund_id: &str) -> Result<FundPerformanceResponse> {
        self.performance_service.fund_performance(fund_id)
    }

    // === Service handles for the richer screens ===

    pub fn funds(&self) -> &Arc<dyn FundServiceTrait> {
        &self.fund_service
    }

    pub fn balance(&self) -> &Arc<dyn BalanceServiceTrait> {
        &self.balance_service
    }

    pub fn banking(&self) -> &Arc<dyn BankingServiceTrait> {
        &self.banking_service
    }

    pub fn transactions(&self) -> &Arc<dyn TransactionServiceTrait> {
        &self.transaction_service
    }

    pub fn performance(&self) -> &Arc<dyn PerformanceServiceTrait> {
        &self.performance_service
    }

    /// Transaction listing shortcut for the history screen.
    pub fn list_transactions(&self, filter: TransactionFilter<'_>) -> Result<Vec<Transaction>> {
        self.transaction_service.list_transactions(filter)
    }
}
