//! Forecast result models.
//!
//! [`ForecastResult`] is a tagged enum so degraded strategies (flat average when history
//! is short, zero-filled when there is no data) stay visible to callers and tests.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionKind;

/// Direction of recent spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Per-category projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryForecast {
    pub forecasted_amounts: Vec<f64>,
    pub historical_average: f64,
    pub last_observed_month_amount: f64,
}

/// Aggregate projection with a confidence band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalForecast {
    pub amounts: Vec<f64>,
    /// Month labels (`YYYY-MM`) parallel to `amounts`.
    pub dates: Vec<String>,
    pub lower_bound: Vec<f64>,
    pub upper_bound: Vec<f64>,
    pub average: f64,
}

impl TotalForecast {
    /// Zero-filled forecast with no month labels.
    pub fn zeroed(horizon_months: usize) -> Self {
        Self {
            amounts: vec![0.0; horizon_months],
            dates: Vec::new(),
            lower_bound: vec![0.0; horizon_months],
            upper_bound: vec![0.0; horizon_months],
            average: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// Forecast assembled from at least two months of history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullForecast {
    pub category_forecasts: BTreeMap<String, CategoryForecast>,
    pub total_forecast: TotalForecast,
    pub horizon_months: u32,
    pub trend: Trend,
    pub transaction_kind: TransactionKind,
    pub historical_monthly_average: f64,
}

/// Forecast built when only a single month of history exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatAverageForecast {
    pub total_forecast: TotalForecast,
    pub horizon_months: u32,
    pub transaction_kind: TransactionKind,
    pub monthly_average: f64,
    pub observed_months: usize,
}

/// Zero-filled forecast returned when no rows are available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyForecast {
    pub total_forecast: TotalForecast,
    pub horizon_months: u32,
    pub transaction_kind: TransactionKind,
}

impl EmptyForecast {
    pub fn new(horizon_months: u32, transaction_kind: TransactionKind) -> Self {
        Self {
            total_forecast: TotalForecast::zeroed(horizon_months as usize),
            horizon_months,
            transaction_kind,
        }
    }
}

/// Which strategy produced a [`ForecastResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastStrategy {
    Full,
    FlatAverage,
    Empty,
}

impl fmt::Display for ForecastStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ForecastStrategy::Full => "full",
            ForecastStrategy::FlatAverage => "flat average",
            ForecastStrategy::Empty => "empty",
        };
        f.write_str(label)
    }
}

static NO_CATEGORY_FORECASTS: BTreeMap<String, CategoryForecast> = BTreeMap::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ForecastResult {
    Full(FullForecast),
    FlatAverage(FlatAverageForecast),
    Empty(EmptyForecast),
}

impl ForecastResult {
    pub fn strategy(&self) -> ForecastStrategy {
        match self {
            ForecastResult::Full(_) => ForecastStrategy::Full,
            ForecastResult::FlatAverage(_) => ForecastStrategy::FlatAverage,
            ForecastResult::Empty(_) => ForecastStrategy::Empty,
        }
    }

    pub fn total_forecast(&self) -> &TotalForecast {
        match self {
            ForecastResult::Full(full) => &full.total_forecast,
            ForecastResult::FlatAverage(flat) => &flat.total_forecast,
            ForecastResult::Empty(empty) => &empty.total_forecast,
        }
    }

    pub fn horizon_months(&self) -> u32 {
        match self {
            ForecastResult::Full(full) => full.horizon_months,
            ForecastResult::FlatAverage(flat) => flat.horizon_months,
            ForecastResult::Empty(empty) => empty.horizon_months,
        }
    }

    /// Degraded strategies always report [`Trend::Stable`].
    pub fn trend(&self) -> Trend {
        match self {
            ForecastResult::Full(full) => full.trend,
            _ => Trend::Stable,
        }
    }

    pub fn transaction_kind(&self) -> TransactionKind {
        match self {
            ForecastResult::Full(full) => full.transaction_kind,
            ForecastResult::FlatAverage(flat) => flat.transaction_kind,
            ForecastResult::Empty(empty) => empty.transaction_kind,
        }
    }

    pub fn historical_monthly_average(&self) -> f64 {
        match self {
            ForecastResult::Full(full) => full.historical_monthly_average,
            ForecastResult::FlatAverage(flat) => flat.monthly_average,
            ForecastResult::Empty(_) => 0.0,
        }
    }

    /// Per-category projections; empty for degraded strategies.
    pub fn category_forecasts(&self) -> &BTreeMap<String, CategoryForecast> {
        match self {
            ForecastResult::Full(full) => &full.category_forecasts,
            _ => &NO_CATEGORY_FORECASTS,
        }
    }

    pub fn is_degraded(&self) -> bool {
        !matches!(self, ForecastResult::Full(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_forecast_is_zero_filled_and_stable() {
        let result = ForecastResult::Empty(EmptyForecast::new(4, TransactionKind::Debit));

        assert_eq!(result.total_forecast().amounts, vec![0.0; 4]);
        assert!(result.total_forecast().dates.is_empty());
        assert_eq!(result.trend(), Trend::Stable);
        assert!(result.category_forecasts().is_empty());
        assert!(result.is_degraded());
    }

    #[test]
    fn result_serializes_with_strategy_tag() {
        let result = ForecastResult::Empty(EmptyForecast::new(2, TransactionKind::Credit));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["strategy"], "empty");
        assert_eq!(json["transaction_kind"], "credit");
        assert_eq!(json["total_forecast"]["amounts"].as_array().unwrap().len(), 2);
    }
}
