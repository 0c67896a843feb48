//! Flags transactions that break a category's usual spending pattern.

use std::{
    collections::{hash_map::Entry, BTreeMap, HashMap},
    hash::Hash,
};

use insights_domain::{Anomaly, AnomalyReport, AnomalyRule, Transaction};
use tracing::debug;

use crate::{policy::AnomalyPolicy, stats, validation, CoreError};

pub struct AnomalyService;

impl AnomalyService {
    /// Detects anomalies with the default IQR settings and the given thresholds.
    pub fn detect(
        transactions: &[Transaction],
        relative_threshold: f64,
        absolute_threshold: f64,
    ) -> Result<AnomalyReport, CoreError> {
        Self::detect_with_policy(
            transactions,
            &AnomalyPolicy::with_thresholds(relative_threshold, absolute_threshold),
        )
    }

    /// Unions two independent rules:
    ///
    /// * IQR: within a category of more than `min_category_size` rows, flag amounts above
    ///   `Q3 + iqr_multiplier * IQR` that also exceed `relative_threshold`.
    /// * Absolute: flag any amount above `absolute_threshold`.
    ///
    /// Identical rows are reported once; results are ordered newest first.
    pub fn detect_with_policy(
        transactions: &[Transaction],
        policy: &AnomalyPolicy,
    ) -> Result<AnomalyReport, CoreError> {
        validation::validate_amounts(transactions)?;
        validation::validate_threshold("relative threshold", policy.relative_threshold)?;
        validation::validate_threshold("absolute threshold", policy.absolute_threshold)?;
        if transactions.is_empty() {
            return Ok(AnomalyReport::empty());
        }

        let mut hits: Vec<(usize, AnomalyRule)> = Self::iqr_hits(transactions, policy)
            .into_iter()
            .map(|idx| (idx, AnomalyRule::Iqr))
            .collect();
        hits.extend(
            transactions
                .iter()
                .enumerate()
                .filter(|(_, txn)| txn.amount > policy.absolute_threshold)
                .map(|(idx, _)| (idx, AnomalyRule::Absolute)),
        );

        let mut anomalies: Vec<Anomaly> = Vec::new();
        let mut positions = HashMap::with_capacity(hits.len());
        for (idx, rule) in hits {
            let txn = &transactions[idx];
            match positions.entry(row_key(txn)) {
                Entry::Occupied(slot) => {
                    let seen: &mut Anomaly = &mut anomalies[*slot.get()];
                    if !seen.rules.contains(&rule) {
                        seen.rules.push(rule);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(anomalies.len());
                    anomalies.push(Anomaly {
                        transaction: txn.clone(),
                        rules: vec![rule],
                    });
                }
            }
        }
        anomalies.sort_by(|a, b| b.transaction.date.cmp(&a.transaction.date));

        debug!(
            scanned = transactions.len(),
            flagged = anomalies.len(),
            "anomaly detection finished"
        );
        Ok(AnomalyReport { anomalies })
    }

    /// Indices flagged by the IQR rule, grouped by ascending category and kept in
    /// input order within each category.
    fn iqr_hits(transactions: &[Transaction], policy: &AnomalyPolicy) -> Vec<usize> {
        let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (idx, txn) in transactions.iter().enumerate() {
            if let Some(category) = txn.category_name() {
                groups.entry(category).or_default().push(idx);
            }
        }

        let mut flagged = Vec::new();
        for members in groups.values() {
            if members.len() <= policy.min_category_size {
                continue;
            }
            let mut amounts: Vec<f64> = members
                .iter()
                .map(|&idx| transactions[idx].amount)
                .collect();
            amounts.sort_by(f64::total_cmp);
            let (Some(q1), Some(q3)) = (
                stats::quantile(&amounts, policy.lower_quantile),
                stats::quantile(&amounts, policy.upper_quantile),
            ) else {
                continue;
            };
            let upper_bound = q3 + policy.iqr_multiplier * (q3 - q1);

            flagged.extend(members.iter().copied().filter(|&idx| {
                let amount = transactions[idx].amount;
                amount > upper_bound && amount > policy.relative_threshold
            }));
        }
        flagged
    }
}

/// Hashable identity of a whole row. Amounts are validated finite; `+ 0.0` folds `-0.0`.
fn row_key(txn: &Transaction) -> impl Hash + Eq + '_ {
    (
        txn.date,
        txn.description.as_str(),
        txn.category.as_deref(),
        (txn.amount + 0.0).to_bits(),
        txn.kind,
        txn.account.as_deref(),
    )
}
