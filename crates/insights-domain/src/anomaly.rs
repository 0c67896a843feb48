//! Anomaly report models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Rule that flagged a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyRule {
    /// Above the category's `Q3 + k·IQR` bound and the relative floor.
    Iqr,
    /// Above the global absolute threshold.
    Absolute,
}

impl fmt::Display for AnomalyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnomalyRule::Iqr => "iqr",
            AnomalyRule::Absolute => "absolute",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub transaction: Transaction,
    pub rules: Vec<AnomalyRule>,
}

impl Anomaly {
    pub fn flagged_by(&self, rule: AnomalyRule) -> bool {
        self.rules.contains(&rule)
    }
}

/// Flagged transactions, deduplicated and ordered by date descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub anomalies: Vec<Anomaly>,
}

impl AnomalyReport {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.anomalies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anomalies.is_empty()
    }

    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.anomalies.iter().map(|anomaly| &anomaly.transaction)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Anomaly> {
        self.anomalies.iter()
    }
}
