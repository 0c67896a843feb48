//! Months of balance remaining at the recent spend rate.

use std::collections::BTreeMap;

use insights_domain::{BudgetRunway, RunwayStatus, Transaction, TransactionKind};

use crate::{
    monthly_aggregator::MonthlyAggregator, policy::RunwayPolicy, stats, validation, CoreError,
};

pub struct RunwayService;

impl RunwayService {
    pub fn runway(
        transactions: &[Transaction],
        budgets: &BTreeMap<String, f64>,
        current_balance: Option<f64>,
    ) -> Result<BudgetRunway, CoreError> {
        Self::runway_with_policy(
            transactions,
            budgets,
            current_balance,
            &RunwayPolicy::default(),
        )
    }

    /// Averages debit totals over the most recent `lookback_months` distinct months and
    /// divides the balance by that rate. A missing or non-positive balance is reported
    /// as [`RunwayStatus::NoBalanceProvided`] with the computed average.
    pub fn runway_with_policy(
        transactions: &[Transaction],
        budgets: &BTreeMap<String, f64>,
        current_balance: Option<f64>,
        policy: &RunwayPolicy,
    ) -> Result<BudgetRunway, CoreError> {
        validation::validate_amounts(transactions)?;
        if transactions.is_empty() || budgets.is_empty() {
            return Ok(BudgetRunway::insufficient_data());
        }

        let monthly = MonthlyAggregator::totals(
            transactions
                .iter()
                .filter(|txn| txn.matches_kind(TransactionKind::Debit)),
        );
        let Some(average) = monthly.tail(policy.lookback_months).mean() else {
            return Ok(BudgetRunway::insufficient_data());
        };

        let balance = current_balance.filter(|value| value.is_finite() && *value > 0.0);
        match balance {
            Some(balance) if average > 0.0 => {
                let months = balance / average;
                let status = if months > policy.warning_months {
                    RunwayStatus::Ok
                } else {
                    RunwayStatus::Warning
                };
                Ok(BudgetRunway {
                    runway_months: stats::round_to(months, 1),
                    average_monthly_spending: stats::round_to(average, 2),
                    current_balance: Some(balance),
                    status,
                })
            }
            _ => Ok(BudgetRunway {
                runway_months: 0.0,
                average_monthly_spending: stats::round_to(average, 2),
                current_balance: None,
                status: RunwayStatus::NoBalanceProvided,
            }),
        }
    }
}
