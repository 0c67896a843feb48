//! Budget runway result.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunwayStatus {
    Ok,
    Warning,
    InsufficientData,
    NoBalanceProvided,
}

impl fmt::Display for RunwayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunwayStatus::Ok => "ok",
            RunwayStatus::Warning => "warning",
            RunwayStatus::InsufficientData => "insufficient_data",
            RunwayStatus::NoBalanceProvided => "no_balance_provided",
        };
        f.write_str(label)
    }
}

/// Months of balance remaining at the recent average spend rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRunway {
    pub runway_months: f64,
    pub average_monthly_spending: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<f64>,
    pub status: RunwayStatus,
}

impl BudgetRunway {
    pub fn insufficient_data() -> Self {
        Self {
            runway_months: 0.0,
            average_monthly_spending: 0.0,
            current_balance: None,
            status: RunwayStatus::InsufficientData,
        }
    }
}
