//! Combined forecast, anomaly and runway export.

use std::collections::BTreeMap;

use insights_core::ForecastPolicy;
use insights_domain::{AnomalyReport, BudgetRunway, ForecastResult, TransactionKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::{self, Config},
    errors::Result,
    ledger::{LedgerColumns, LedgerView},
};

/// Inputs for one report run beyond the ledger itself.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub horizon_months: u32,
    pub kind: TransactionKind,
    /// Runway is omitted when no budgets are supplied.
    pub budgets: Option<BTreeMap<String, f64>>,
    pub current_balance: Option<f64>,
}

impl ReportRequest {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            horizon_months: config.forecast.horizon_months,
            kind: config::default_kind(config)?,
            budgets: None,
            current_balance: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    pub currency: String,
    pub transaction_count: usize,
    pub columns: LedgerColumns,
    pub forecast: ForecastResult,
    pub anomalies: AnomalyReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runway: Option<BudgetRunway>,
}

impl InsightsReport {
    pub fn build(view: &LedgerView, config: &Config, request: &ReportRequest) -> Result<Self> {
        let forecast = view.forecast(
            request.horizon_months,
            request.kind,
            &ForecastPolicy::default(),
        )?;
        let anomalies = view.detect_anomalies(&config::anomaly_policy(config))?;
        let runway = request
            .budgets
            .as_ref()
            .map(|budgets| {
                view.runway(
                    budgets,
                    request.current_balance,
                    &config::runway_policy(config),
                )
            })
            .transpose()?;

        debug!(
            strategy = ?forecast.strategy(),
            anomalies = anomalies.len(),
            with_runway = runway.is_some(),
            "report assembled"
        );

        Ok(Self {
            currency: config.currency.clone(),
            transaction_count: view.len(),
            columns: view.columns(),
            forecast,
            anomalies,
            runway,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use insights_domain::{ForecastStrategy, RunwayStatus, Transaction};

    use super::*;

    #[test]
    fn report_includes_runway_only_with_budgets() {
        let view = LedgerView::from_transactions(vec![Transaction::debit(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Rent",
            1000.0,
        )
        .with_category("Housing")]);
        let config = Config::default();
        let mut request = ReportRequest::from_config(&config).unwrap();

        let report = InsightsReport::build(&view, &config, &request).unwrap();
        assert!(report.runway.is_none());
        assert_eq!(report.forecast.strategy(), ForecastStrategy::FlatAverage);

        request.budgets = Some(BTreeMap::from([("Housing".to_string(), 1200.0)]));
        request.current_balance = Some(5000.0);
        let report = InsightsReport::build(&view, &config, &request).unwrap();
        let runway = report.runway.unwrap();
        assert_eq!(runway.runway_months, 5.0);
        assert_eq!(runway.status, RunwayStatus::Ok);
    }
}
