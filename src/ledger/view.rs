use std::collections::{BTreeMap, BTreeSet};

use insights_core::{
    AnomalyPolicy, AnomalyService, CoreError, ForecastPolicy, ForecastService, RunwayPolicy,
    RunwayService,
};
use insights_domain::{
    AnomalyReport, BudgetRunway, EmptyForecast, ForecastResult, Transaction, TransactionKind,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Records which columns the source ledger carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerColumns {
    pub date: bool,
    pub description: bool,
    pub category: bool,
    pub amount: bool,
    pub kind: bool,
    pub account: bool,
}

impl LedgerColumns {
    pub fn all() -> Self {
        Self {
            date: true,
            description: true,
            category: true,
            amount: true,
            kind: true,
            account: true,
        }
    }

    /// Date and amount are needed for any month-based computation.
    pub fn has_required(&self) -> bool {
        self.date && self.amount
    }
}

impl Default for LedgerColumns {
    fn default() -> Self {
        Self::all()
    }
}

/// Immutable ledger snapshot with kind and category slicing.
///
/// The engine facades here map missing columns to the documented degraded results
/// before delegating to `insights_core`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerView {
    transactions: Vec<Transaction>,
    columns: LedgerColumns,
}

impl LedgerView {
    pub fn new(transactions: Vec<Transaction>, columns: LedgerColumns) -> Self {
        Self {
            transactions,
            columns,
        }
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions, LedgerColumns::all())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn columns(&self) -> LedgerColumns {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Rows of `kind`. Rows without a kind only match when the source had no kind
    /// column; a blank cell in a present column matches neither kind.
    pub fn filter_kind(&self, kind: TransactionKind) -> LedgerView {
        if self.columns.kind {
            self.filtered(|txn| txn.kind == Some(kind))
        } else {
            self.filtered(|txn| txn.matches_kind(kind))
        }
    }

    pub fn debits(&self) -> LedgerView {
        self.filter_kind(TransactionKind::Debit)
    }

    pub fn credits(&self) -> LedgerView {
        self.filter_kind(TransactionKind::Credit)
    }

    pub fn filter_category(&self, category: &str) -> LedgerView {
        self.filtered(|txn| txn.category_name() == Some(category))
    }

    /// Distinct assigned categories, sorted.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.transactions
            .iter()
            .filter_map(Transaction::category_name)
            .collect()
    }

    /// Distinct accounts, sorted.
    pub fn accounts(&self) -> BTreeSet<&str> {
        self.transactions
            .iter()
            .filter_map(|txn| txn.account.as_deref())
            .collect()
    }

    pub fn forecast(
        &self,
        horizon_months: u32,
        kind: TransactionKind,
        policy: &ForecastPolicy,
    ) -> Result<ForecastResult, CoreError> {
        if !self.columns.has_required() {
            debug!("ledger lacks date or amount column, returning empty forecast");
            return Ok(ForecastResult::Empty(EmptyForecast::new(horizon_months, kind)));
        }
        let slice = self.filter_kind(kind);
        ForecastService::forecast_with_policy(slice.transactions(), horizon_months, kind, policy)
    }

    /// Runs anomaly detection over the debit slice.
    pub fn detect_anomalies(&self, policy: &AnomalyPolicy) -> Result<AnomalyReport, CoreError> {
        if !(self.columns.category && self.columns.amount) {
            debug!("ledger lacks category or amount column, skipping anomaly detection");
            return Ok(AnomalyReport::empty());
        }
        AnomalyService::detect_with_policy(self.debits().transactions(), policy)
    }

    pub fn runway(
        &self,
        budgets: &BTreeMap<String, f64>,
        current_balance: Option<f64>,
        policy: &RunwayPolicy,
    ) -> Result<BudgetRunway, CoreError> {
        if !self.columns.has_required() {
            return Ok(BudgetRunway::insufficient_data());
        }
        RunwayService::runway_with_policy(
            self.debits().transactions(),
            budgets,
            current_balance,
            policy,
        )
    }

    fn filtered(&self, keep: impl Fn(&Transaction) -> bool) -> LedgerView {
        LedgerView {
            transactions: self
                .transactions
                .iter()
                .filter(|txn| keep(txn))
                .cloned()
                .collect(),
            columns: self.columns,
        }
    }
}

impl From<Vec<Transaction>> for LedgerView {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::from_transactions(transactions)
    }
}
