mod common;

use common::{date, debit, same_month};
use spend_insights::{
    domain::{AnomalyRule, Transaction},
    engines::{AnomalyPolicy, AnomalyService},
    ledger::{LedgerColumns, LedgerView},
};

#[test]
fn small_uniform_category_is_only_flagged_above_absolute_threshold() {
    let txns = same_month("Coffee", &[10.0, 10.0, 10.0]);

    assert!(AnomalyService::detect(&txns, 50.0, 500.0).unwrap().is_empty());

    let report = AnomalyService::detect(&txns, 50.0, 5.0).unwrap();
    assert_eq!(report.len(), 3);
    assert!(report.iter().all(|anomaly| anomaly.rules == vec![AnomalyRule::Absolute]));
}

#[test]
fn large_purchase_is_flagged_by_absolute_rule() {
    let txns = same_month("Electronics", &[10.0, 1000.0]);

    let report = AnomalyService::detect(&txns, 50.0, 500.0).unwrap();

    assert_eq!(report.len(), 1);
    let anomaly = report.iter().next().unwrap();
    assert_eq!(anomaly.transaction.amount, 1000.0);
    assert!(anomaly.flagged_by(AnomalyRule::Absolute));
    assert!(!anomaly.flagged_by(AnomalyRule::Iqr));
}

#[test]
fn grocery_spike_is_flagged_by_iqr_rule() {
    let txns = same_month("Groceries", &[10.0, 12.0, 11.0, 13.0, 12.0, 200.0]);

    let report = AnomalyService::detect(&txns, 50.0, 500.0).unwrap();

    assert_eq!(report.len(), 1);
    let anomaly = report.iter().next().unwrap();
    assert_eq!(anomaly.transaction.amount, 200.0);
    assert_eq!(anomaly.rules, vec![AnomalyRule::Iqr]);
}

#[test]
fn relative_threshold_filters_small_iqr_outliers() {
    let txns = same_month("Snacks", &[1.0, 1.0, 1.0, 1.0, 1.0, 20.0]);

    assert!(AnomalyService::detect(&txns, 50.0, 500.0).unwrap().is_empty());
    assert_eq!(AnomalyService::detect(&txns, 10.0, 500.0).unwrap().len(), 1);
}

#[test]
fn categories_with_five_rows_skip_the_iqr_rule() {
    let txns = same_month("Gifts", &[10.0, 10.0, 10.0, 10.0, 900.0]);

    let report = AnomalyService::detect(&txns, 50.0, 10_000.0).unwrap();

    assert!(report.is_empty());
}

#[test]
fn rows_matched_by_both_rules_are_reported_once() {
    let txns = same_month("Groceries", &[10.0, 12.0, 11.0, 13.0, 12.0, 600.0]);

    let report = AnomalyService::detect(&txns, 50.0, 500.0).unwrap();

    assert_eq!(report.len(), 1);
    let anomaly = report.iter().next().unwrap();
    assert!(anomaly.flagged_by(AnomalyRule::Iqr));
    assert!(anomaly.flagged_by(AnomalyRule::Absolute));
}

#[test]
fn results_are_ordered_newest_first() {
    let txns = vec![
        debit(date(2024, 1, 10), "Travel", 700.0),
        debit(date(2024, 5, 2), "Travel", 650.0),
        debit(date(2024, 3, 7), "Rent", 1200.0),
    ];

    let report = AnomalyService::detect(&txns, 50.0, 500.0).unwrap();

    let dates: Vec<_> = report.transactions().map(|txn| txn.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 5, 2), date(2024, 3, 7), date(2024, 1, 10)]
    );
}

#[test]
fn raising_absolute_threshold_never_adds_anomalies() {
    let mut txns = same_month("Groceries", &[10.0, 12.0, 11.0, 13.0, 12.0, 200.0]);
    txns.extend(same_month("Electronics", &[250.0, 800.0, 1500.0]));

    let counts: Vec<usize> = [0.0, 100.0, 300.0, 900.0, 2000.0]
        .iter()
        .map(|threshold| AnomalyService::detect(&txns, 50.0, *threshold).unwrap().len())
        .collect();

    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]), "{counts:?}");
}

#[test]
fn invalid_thresholds_are_rejected() {
    let txns = same_month("Food", &[10.0]);
    assert!(AnomalyService::detect(&txns, f64::NAN, 500.0).is_err());
    assert!(AnomalyService::detect(&txns, 50.0, f64::INFINITY).is_err());
}

#[test]
fn ledger_view_scans_debits_only() {
    let txns = vec![
        Transaction::credit(date(2024, 3, 1), "Salary", 3000.0).with_category("Income"),
        debit(date(2024, 3, 2), "Furniture", 900.0),
    ];
    let view = LedgerView::new(txns, LedgerColumns::all());

    let report = view.detect_anomalies(&AnomalyPolicy::default()).unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report.iter().next().unwrap().transaction.amount, 900.0);
}
