mod common;

use std::collections::BTreeMap;

use common::{credit, date, monthly_debits};
use spend_insights::{
    domain::RunwayStatus,
    engines::{RunwayPolicy, RunwayService},
    ledger::LedgerView,
};

fn budgets() -> BTreeMap<String, f64> {
    BTreeMap::from([("Living".to_string(), 1000.0)])
}

#[test]
fn healthy_balance_reports_ok() {
    let txns = monthly_debits("Living", &[300.0, 600.0, 900.0, 1200.0]);

    let runway = RunwayService::runway(&txns, &budgets(), Some(4500.0)).unwrap();

    assert_eq!(runway.average_monthly_spending, 900.0);
    assert_eq!(runway.runway_months, 5.0);
    assert_eq!(runway.status, RunwayStatus::Ok);
}

#[test]
fn short_runway_reports_warning() {
    let txns = monthly_debits("Living", &[300.0, 600.0, 900.0, 1200.0]);

    let runway = RunwayService::runway(&txns, &budgets(), Some(1800.0)).unwrap();

    assert_eq!(runway.runway_months, 2.0);
    assert_eq!(runway.status, RunwayStatus::Warning);
}

#[test]
fn missing_balance_still_reports_average() {
    let txns = monthly_debits("Living", &[300.0, 600.0, 900.0, 1200.0]);

    for balance in [None, Some(0.0), Some(-50.0)] {
        let runway = RunwayService::runway(&txns, &budgets(), balance).unwrap();
        assert_eq!(runway.status, RunwayStatus::NoBalanceProvided);
        assert_eq!(runway.average_monthly_spending, 900.0);
    }
}

#[test]
fn no_budgets_or_no_debits_is_insufficient_data() {
    let txns = monthly_debits("Living", &[300.0, 600.0]);
    let runway = RunwayService::runway(&txns, &BTreeMap::new(), Some(1000.0)).unwrap();
    assert_eq!(runway.status, RunwayStatus::InsufficientData);

    let credits = vec![credit(date(2024, 1, 31), "Salary", 3000.0)];
    let runway = RunwayService::runway(&credits, &budgets(), Some(1000.0)).unwrap();
    assert_eq!(runway.status, RunwayStatus::InsufficientData);

    let runway = RunwayService::runway(&[], &budgets(), Some(1000.0)).unwrap();
    assert_eq!(runway.status, RunwayStatus::InsufficientData);
}

#[test]
fn lookback_window_follows_policy() {
    let view = LedgerView::from_transactions(monthly_debits(
        "Living",
        &[300.0, 600.0, 900.0, 1200.0],
    ));
    let policy = RunwayPolicy {
        lookback_months: 2,
        ..RunwayPolicy::default()
    };

    let runway = view.runway(&budgets(), Some(2100.0), &policy).unwrap();

    assert_eq!(runway.average_monthly_spending, 1050.0);
    assert_eq!(runway.runway_months, 2.0);
}
