//! insights-core
//!
//! Forecasting, anomaly detection and runway engines over ledger snapshots.
//! Depends on insights-domain. Pure computations: no I/O, no clock, no shared state.

pub mod aggregate_forecaster;
pub mod anomaly_service;
pub mod category_forecaster;
pub mod error;
pub mod forecast_service;
pub mod monthly_aggregator;
pub mod policy;
pub mod runway_service;
pub mod stats;
pub mod trend_estimator;
pub mod validation;

pub use aggregate_forecaster::AggregateForecaster;
pub use anomaly_service::AnomalyService;
pub use category_forecaster::CategoryForecaster;
pub use error::CoreError;
pub use forecast_service::ForecastService;
pub use monthly_aggregator::{GroupBy, MonthlyAggregator};
pub use policy::*;
pub use runway_service::RunwayService;
pub use trend_estimator::TrendEstimator;
