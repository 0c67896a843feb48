//! Forecast entry point: picks a strategy from the available history and assembles
//! the combined result.

use insights_domain::{
    EmptyForecast, FlatAverageForecast, ForecastResult, FullForecast, MonthlySeries,
    TotalForecast, Transaction, TransactionKind,
};
use tracing::debug;

use crate::{
    aggregate_forecaster::AggregateForecaster, category_forecaster::CategoryForecaster,
    monthly_aggregator::MonthlyAggregator, policy::ForecastPolicy, trend_estimator::TrendEstimator,
    validation, CoreError,
};

pub struct ForecastService;

impl ForecastService {
    /// Forecasts `horizon_months` of `kind` spending with the default policy.
    pub fn forecast(
        transactions: &[Transaction],
        horizon_months: u32,
        kind: TransactionKind,
    ) -> Result<ForecastResult, CoreError> {
        Self::forecast_with_policy(transactions, horizon_months, kind, &ForecastPolicy::default())
    }

    /// Forecasts with explicit weights and thresholds.
    ///
    /// Rows without a kind are treated as `kind`. No rows yield [`ForecastResult::Empty`];
    /// fewer than `min_history_months` distinct months yield
    /// [`ForecastResult::FlatAverage`].
    pub fn forecast_with_policy(
        transactions: &[Transaction],
        horizon_months: u32,
        kind: TransactionKind,
        policy: &ForecastPolicy,
    ) -> Result<ForecastResult, CoreError> {
        validation::validate_amounts(transactions)?;
        if horizon_months > policy.max_horizon_months {
            return Err(CoreError::Validation(format!(
                "horizon of {} months exceeds the maximum of {}",
                horizon_months, policy.max_horizon_months
            )));
        }

        let slice: Vec<&Transaction> = transactions
            .iter()
            .filter(|txn| txn.matches_kind(kind))
            .collect();
        if slice.is_empty() {
            debug!(kind = %kind, "no matching transactions, returning empty forecast");
            return Ok(ForecastResult::Empty(EmptyForecast::new(horizon_months, kind)));
        }

        let totals = MonthlyAggregator::totals(slice.iter().copied());
        if totals.len() < policy.min_history_months {
            debug!(
                kind = %kind,
                months = totals.len(),
                "insufficient history, falling back to flat average"
            );
            return Ok(ForecastResult::FlatAverage(Self::flat_average(
                &totals,
                horizon_months,
                kind,
                policy,
            )));
        }

        let category_forecasts = CategoryForecaster::forecast(&slice, horizon_months, policy);
        let total_forecast = AggregateForecaster::forecast(&totals, horizon_months, policy)?;
        let trend = TrendEstimator::classify_with_policy(&totals.values(), policy);
        debug!(
            kind = %kind,
            months = totals.len(),
            categories = category_forecasts.len(),
            trend = %trend,
            "assembled full forecast"
        );

        Ok(ForecastResult::Full(FullForecast {
            category_forecasts,
            total_forecast,
            horizon_months,
            trend,
            transaction_kind: kind,
            historical_monthly_average: totals.mean().unwrap_or(0.0),
        }))
    }

    fn flat_average(
        totals: &MonthlySeries,
        horizon_months: u32,
        kind: TransactionKind,
        policy: &ForecastPolicy,
    ) -> FlatAverageForecast {
        let observed_months = totals.len();
        let monthly_average = totals.sum() / observed_months.max(1) as f64;
        let horizon = horizon_months as usize;
        let dates = totals
            .last_month()
            .map(|month| month.following(horizon).iter().map(|m| m.label()).collect())
            .unwrap_or_default();

        FlatAverageForecast {
            total_forecast: TotalForecast {
                amounts: vec![monthly_average; horizon],
                dates,
                lower_bound: vec![monthly_average * (1.0 - policy.flat_band); horizon],
                upper_bound: vec![monthly_average * (1.0 + policy.flat_band); horizon],
                average: monthly_average,
            },
            horizon_months,
            transaction_kind: kind,
            monthly_average,
            observed_months,
        }
    }
}
