use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Stores user-configurable defaults for the analytics commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// `chrono` format used for the ledger's `Date` column.
    #[serde(default = "Config::default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub forecast: ForecastSettings,
    #[serde(default)]
    pub anomaly: AnomalySettings,
    #[serde(default)]
    pub runway: RunwaySettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Ledger CSV used when a command is given no path.
    pub default_ledger_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            date_format: Self::default_date_format(),
            forecast: ForecastSettings::default(),
            anomaly: AnomalySettings::default(),
            runway: RunwaySettings::default(),
            default_ledger_path: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_date_format() -> String {
        "%m/%d/%Y".into()
    }

    /// Checks values a hand-edited file could get wrong.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("anomaly.relative_threshold", self.anomaly.relative_threshold)?;
        non_negative("anomaly.absolute_threshold", self.anomaly.absolute_threshold)?;
        non_negative("runway.warning_months", self.runway.warning_months)?;
        if self.runway.lookback_months == 0 {
            return Err(ConfigError::Invalid {
                field: "runway.lookback_months",
                message: "must be at least 1".into(),
            });
        }
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "date_format",
                message: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            message: format!("expected a non-negative number, got {value}"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSettings {
    #[serde(default = "ForecastSettings::default_horizon_months")]
    pub horizon_months: u32,
    /// `debit` or `credit`.
    #[serde(default = "ForecastSettings::default_transaction_kind")]
    pub transaction_kind: String,
}

impl ForecastSettings {
    pub fn default_horizon_months() -> u32 {
        3
    }

    pub fn default_transaction_kind() -> String {
        "debit".into()
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            horizon_months: Self::default_horizon_months(),
            transaction_kind: Self::default_transaction_kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalySettings {
    #[serde(default = "AnomalySettings::default_relative_threshold")]
    pub relative_threshold: f64,
    #[serde(default = "AnomalySettings::default_absolute_threshold")]
    pub absolute_threshold: f64,
}

impl AnomalySettings {
    pub fn default_relative_threshold() -> f64 {
        50.0
    }

    pub fn default_absolute_threshold() -> f64 {
        500.0
    }
}

impl Default for AnomalySettings {
    fn default() -> Self {
        Self {
            relative_threshold: Self::default_relative_threshold(),
            absolute_threshold: Self::default_absolute_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwaySettings {
    #[serde(default = "RunwaySettings::default_lookback_months")]
    pub lookback_months: usize,
    #[serde(default = "RunwaySettings::default_warning_months")]
    pub warning_months: f64,
}

impl RunwaySettings {
    pub fn default_lookback_months() -> usize {
        3
    }

    pub fn default_warning_months() -> f64 {
        3.0
    }
}

impl Default for RunwaySettings {
    fn default() -> Self {
        Self {
            lookback_months: Self::default_lookback_months(),
            warning_months: Self::default_warning_months(),
        }
    }
}
