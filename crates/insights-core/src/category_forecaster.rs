//! Per-category forecasts from a recency-weighted average plus a linear trend.

use std::collections::BTreeMap;

use insights_domain::{CategoryForecast, MonthlySeries, Transaction};

use crate::{monthly_aggregator::MonthlyAggregator, policy::ForecastPolicy, stats};

pub struct CategoryForecaster;

impl CategoryForecaster {
    /// Forecasts every categorized row group in `transactions` over `horizon_months`.
    pub fn forecast(
        transactions: &[&Transaction],
        horizon_months: u32,
        policy: &ForecastPolicy,
    ) -> BTreeMap<String, CategoryForecast> {
        let mut grouped: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
        for &txn in transactions {
            if let Some(category) = txn.category_name() {
                grouped.entry(category).or_default().push(txn);
            }
        }

        grouped
            .into_iter()
            .map(|(category, rows)| {
                let series = MonthlyAggregator::totals(rows.iter().copied());
                let amounts: Vec<f64> = rows.iter().map(|txn| txn.amount).collect();
                let raw_mean = stats::mean(&amounts).unwrap_or(0.0);
                (
                    category.to_string(),
                    Self::project(&series, raw_mean, horizon_months, policy),
                )
            })
            .collect()
    }

    /// Projects one category's monthly series.
    ///
    /// Sparse categories repeat `raw_mean` (the per-transaction mean). Otherwise step
    /// `i` is `max(0, weighted_average + slope * i)`, which saturates at zero under a
    /// strong negative trend.
    pub fn project(
        series: &MonthlySeries,
        raw_mean: f64,
        horizon_months: u32,
        policy: &ForecastPolicy,
    ) -> CategoryForecast {
        let values = series.values();
        let horizon = horizon_months as usize;

        let forecasted_amounts = match stats::linear_fit(&values) {
            Some(fit) if values.len() >= policy.min_history_months => {
                let weighted_average: f64 = stats::recency_weights(values.len())
                    .iter()
                    .zip(&values)
                    .map(|(weight, value)| weight * value)
                    .sum();
                (1..=horizon)
                    .map(|step| (weighted_average + fit.slope * step as f64).max(0.0))
                    .collect()
            }
            _ => vec![raw_mean; horizon],
        };

        CategoryForecast {
            forecasted_amounts,
            historical_average: series.mean().unwrap_or(raw_mean),
            last_observed_month_amount: series.last().unwrap_or(0.0),
        }
    }
}
