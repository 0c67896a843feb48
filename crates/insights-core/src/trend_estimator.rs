//! Slope-based trend classification.

use insights_domain::{MonthlySeries, Trend};

use crate::{policy::ForecastPolicy, stats};

pub struct TrendEstimator;

impl TrendEstimator {
    /// Classifies `values` with the default policy.
    pub fn classify(values: &[f64]) -> Trend {
        Self::classify_with_policy(values, &ForecastPolicy::default())
    }

    pub fn classify_series(series: &MonthlySeries) -> Trend {
        Self::classify(&series.values())
    }

    /// Fits a line to the most recent `trend_window` points and compares the slope
    /// against a threshold proportional to their mean, so categories of very
    /// different scale are judged alike.
    pub fn classify_with_policy(values: &[f64], policy: &ForecastPolicy) -> Trend {
        if values.len() < policy.trend_min_points {
            return Trend::Stable;
        }
        let window = policy.trend_window.min(values.len());
        let recent = &values[values.len() - window..];
        let Some(fit) = stats::linear_fit(recent) else {
            return Trend::Stable;
        };
        let threshold = stats::mean(recent).unwrap_or(0.0) * policy.trend_relative_threshold;

        if fit.slope > threshold {
            Trend::Increasing
        } else if fit.slope < -threshold {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }
}
