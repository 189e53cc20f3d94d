//! Portfolio history module - synthetic daily series per chart period.

mod history_model;
mod history_service;
pub mod series_generator;

pub use history_model::{HistoryPeriod, HistoryPoint, PortfolioHistory};
pub use history_service::{HistoryService, HistoryServiceTrait};
pub use series_generator::{generate_daily_series, Checkpoint, SeriesPoint};

#[cfg(test)]
mod history_service_tests;
