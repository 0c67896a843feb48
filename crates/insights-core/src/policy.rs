//! Tunable constants for the engines.
//!
//! The algorithms read every threshold and weight from these structs; the `DEFAULT_*`
//! values reproduce the reference behaviour.

/// Forecasting weights and thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPolicy {
    /// Exponential smoothing factor applied to monthly totals.
    pub smoothing_alpha: f64,
    /// Share of the trend projection in the blended total forecast; the smoothed
    /// level receives the remainder.
    pub trend_weight: f64,
    /// Half-width of the confidence band, in population standard deviations.
    pub confidence_z: f64,
    /// Number of most recent points used for trend classification.
    pub trend_window: usize,
    /// Shorter series are always classified as stable.
    pub trend_min_points: usize,
    /// Slope threshold as a fraction of the window mean.
    pub trend_relative_threshold: f64,
    /// Distinct months needed before trend-based forecasting applies.
    pub min_history_months: usize,
    /// Relative half-width of the flat-average fallback band.
    pub flat_band: f64,
    pub max_horizon_months: u32,
}

impl ForecastPolicy {
    pub fn level_weight(&self) -> f64 {
        1.0 - self.trend_weight
    }
}

impl Default for ForecastPolicy {
    fn default() -> Self {
        DEFAULT_FORECAST_POLICY
    }
}

pub const DEFAULT_FORECAST_POLICY: ForecastPolicy = ForecastPolicy {
    smoothing_alpha: 0.3,
    trend_weight: 0.7,
    confidence_z: 1.96,
    trend_window: 6,
    trend_min_points: 3,
    trend_relative_threshold: 0.05,
    min_history_months: 2,
    flat_band: 0.2,
    max_horizon_months: 120,
};

/// Anomaly thresholds. The relative and absolute thresholds are independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyPolicy {
    pub iqr_multiplier: f64,
    pub lower_quantile: f64,
    pub upper_quantile: f64,
    /// Categories need strictly more transactions than this for the IQR rule.
    pub min_category_size: usize,
    /// IQR hits must also exceed this amount.
    pub relative_threshold: f64,
    /// Any transaction above this amount is flagged.
    pub absolute_threshold: f64,
}

impl AnomalyPolicy {
    pub fn with_thresholds(relative_threshold: f64, absolute_threshold: f64) -> Self {
        Self {
            relative_threshold,
            absolute_threshold,
            ..DEFAULT_ANOMALY_POLICY
        }
    }
}

impl Default for AnomalyPolicy {
    fn default() -> Self {
        DEFAULT_ANOMALY_POLICY
    }
}

pub const DEFAULT_ANOMALY_POLICY: AnomalyPolicy = AnomalyPolicy {
    iqr_multiplier: 1.5,
    lower_quantile: 0.25,
    upper_quantile: 0.75,
    min_category_size: 5,
    relative_threshold: 50.0,
    absolute_threshold: 500.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunwayPolicy {
    /// Most recent distinct months averaged for the spend rate.
    pub lookback_months: usize,
    /// Runways at or below this many months are reported as warnings.
    pub warning_months: f64,
}

impl Default for RunwayPolicy {
    fn default() -> Self {
        DEFAULT_RUNWAY_POLICY
    }
}

pub const DEFAULT_RUNWAY_POLICY: RunwayPolicy = RunwayPolicy {
    lookback_months: 3,
    warning_months: 3.0,
};
