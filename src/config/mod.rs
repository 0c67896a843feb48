//! Bridges persisted [`Config`] values into engine policies.

use std::str::FromStr;

use insights_core::{AnomalyPolicy, RunwayPolicy};
use insights_domain::TransactionKind;

pub use insights_config::{
    AnomalySettings, Config, ConfigError, ConfigManager, ForecastSettings, RunwaySettings,
};

use crate::errors::{InsightsError, Result};

/// Loads the config from the default location, falling back to defaults when absent.
pub fn load_default() -> Result<(ConfigManager, Config)> {
    let manager = ConfigManager::from_env()?;
    let config = manager.load()?;
    Ok((manager, config))
}

/// Transaction kind forecast when a command does not name one.
pub fn default_kind(config: &Config) -> Result<TransactionKind> {
    TransactionKind::from_str(&config.forecast.transaction_kind)
        .map_err(|err| InsightsError::ConfigError(format!("forecast.transaction_kind: {err}")))
}

pub fn anomaly_policy(config: &Config) -> AnomalyPolicy {
    AnomalyPolicy::with_thresholds(
        config.anomaly.relative_threshold,
        config.anomaly.absolute_threshold,
    )
}

pub fn runway_policy(config: &Config) -> RunwayPolicy {
    RunwayPolicy {
        lookback_months: config.runway.lookback_months,
        warning_months: config.runway.warning_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies_follow_config_values() {
        let mut config = Config::default();
        config.anomaly.absolute_threshold = 900.0;
        config.runway.lookback_months = 6;
        config.forecast.transaction_kind = "credit".into();

        assert_eq!(anomaly_policy(&config).absolute_threshold, 900.0);
        assert_eq!(anomaly_policy(&config).iqr_multiplier, 1.5);
        assert_eq!(runway_policy(&config).lookback_months, 6);
        assert_eq!(default_kind(&config).unwrap(), TransactionKind::Credit);
    }

    #[test]
    fn unknown_kind_is_a_config_error() {
        let mut config = Config::default();
        config.forecast.transaction_kind = "transfer".into();
        assert!(matches!(
            default_kind(&config),
            Err(InsightsError::ConfigError(_))
        ));
    }
}
