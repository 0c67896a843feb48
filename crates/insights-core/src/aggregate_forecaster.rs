//! Total forecast blending exponential smoothing with a linear trend.

use insights_domain::{MonthlySeries, TotalForecast};

use crate::{policy::ForecastPolicy, stats, CoreError};

pub struct AggregateForecaster;

impl AggregateForecaster {
    /// Forecasts `horizon_months` past the last observed month of `series`.
    ///
    /// Each step is `max(0, w * trend + (1 - w) * smoothed_level)` with `w` the policy's
    /// trend weight. The band is a flat `±z·σ` around each point, σ being the population
    /// standard deviation of the observed totals; it does not widen with the horizon.
    pub fn forecast(
        series: &MonthlySeries,
        horizon_months: u32,
        policy: &ForecastPolicy,
    ) -> Result<TotalForecast, CoreError> {
        let values = series.values();
        let (Some(fit), Some(last_month)) = (stats::linear_fit(&values), series.last_month())
        else {
            return Err(CoreError::InvalidOperation(format!(
                "aggregate forecast needs at least 2 months of history, got {}",
                values.len()
            )));
        };

        let smoothed = stats::exponential_smoothing(&values, policy.smoothing_alpha);
        let level = smoothed.last().copied().unwrap_or(0.0);
        let last_index = (values.len() - 1) as f64;
        let spread = policy.confidence_z * stats::population_std(&values);
        let horizon = horizon_months as usize;

        let mut amounts = Vec::with_capacity(horizon);
        let mut lower_bound = Vec::with_capacity(horizon);
        let mut upper_bound = Vec::with_capacity(horizon);
        for step in 1..=horizon {
            let trend_value = fit.at(last_index + step as f64);
            let value =
                (policy.trend_weight * trend_value + policy.level_weight() * level).max(0.0);
            amounts.push(value);
            lower_bound.push((value - spread).max(0.0));
            upper_bound.push(value + spread);
        }

        Ok(TotalForecast {
            average: stats::mean(&amounts).unwrap_or(0.0),
            dates: last_month
                .following(horizon)
                .iter()
                .map(|month| month.label())
                .collect(),
            amounts,
            lower_bound,
            upper_bound,
        })
    }
}
