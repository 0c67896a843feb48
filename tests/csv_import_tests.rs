mod common;

use common::{date, temp_dir, write_file, SAMPLE_CSV};
use std::collections::BTreeMap;

use spend_insights::{
    domain::{ForecastResult, ForecastStrategy, RunwayStatus, TransactionKind},
    engines::{AnomalyPolicy, ForecastPolicy, RunwayPolicy},
    errors::InsightsError,
    ledger::{load_ledger, read_ledger, CsvImportOptions},
};

#[test]
fn imports_full_ledger_export() {
    let dir = temp_dir();
    let path = write_file(&dir, "ledger.csv", SAMPLE_CSV);

    let view = load_ledger(&path, &CsvImportOptions::default()).unwrap();

    assert_eq!(view.len(), 9);
    assert!(view.columns().has_required());
    assert_eq!(view.credits().len(), 2);
    assert_eq!(view.debits().len(), 7);

    let first = &view.transactions()[0];
    assert_eq!(first.date, date(2024, 1, 5));
    assert_eq!(first.category_name(), Some("Housing"));
    assert_eq!(first.kind, Some(TransactionKind::Debit));
    assert_eq!(first.account.as_deref(), Some("Checking"));
    assert_eq!(view.transactions()[5].date, date(2024, 2, 28));
}

#[test]
fn optional_columns_may_be_absent() {
    let csv = "Date,Amount\n01/05/2024,12.50\n02/05/2024,30\n";

    let view = read_ledger(csv.as_bytes(), &CsvImportOptions::default()).unwrap();

    assert_eq!(view.len(), 2);
    assert!(!view.columns().category);
    assert!(view.transactions().iter().all(|txn| txn.kind.is_none()));
    assert!(view.transactions()[0].description.is_empty());
}

#[test]
fn blank_type_cell_matches_neither_kind() {
    let csv = "\
Date,Description,Category,Amount,Transaction Type
01/05/2024,Rent,Housing,100.00,debit
02/05/2024,Rent,Housing,100.00,debit
02/20/2024,Mystery,Other,5000.00,
";
    let view = read_ledger(csv.as_bytes(), &CsvImportOptions::default()).unwrap();
    assert!(view.columns().kind);
    assert_eq!(view.len(), 3);
    assert_eq!(view.debits().len(), 2);
    assert!(view.credits().is_empty());

    let policy = ForecastPolicy::default();
    let debits = view.forecast(1, TransactionKind::Debit, &policy).unwrap();
    assert_eq!(debits.historical_monthly_average(), 100.0);
    let credits = view.forecast(1, TransactionKind::Credit, &policy).unwrap();
    assert_eq!(credits.strategy(), ForecastStrategy::Empty);

    let anomalies = view.detect_anomalies(&AnomalyPolicy::default()).unwrap();
    assert!(anomalies.is_empty());

    let budgets = BTreeMap::from([("Housing".to_string(), 100.0)]);
    let runway = view
        .runway(&budgets, Some(1000.0), &RunwayPolicy::default())
        .unwrap();
    assert_eq!(runway.average_monthly_spending, 100.0);
    assert_eq!(runway.status, RunwayStatus::Ok);
}

#[test]
fn untyped_ledger_treats_rows_as_any_kind() {
    let csv = "Date,Category,Amount\n01/05/2024,Rent,100\n02/05/2024,Rent,300\n";

    let view = read_ledger(csv.as_bytes(), &CsvImportOptions::default()).unwrap();

    assert!(!view.columns().kind);
    assert_eq!(view.debits().len(), 2);
    assert_eq!(view.credits().len(), 2);
}

#[test]
fn missing_amount_column_yields_empty_forecast() {
    let csv = "Date,Description,Category\n01/05/2024,Rent,Housing\n";

    let view = read_ledger(csv.as_bytes(), &CsvImportOptions::default()).unwrap();

    assert!(view.is_empty());
    assert!(!view.columns().amount);
    let forecast = view
        .forecast(3, TransactionKind::Debit, &ForecastPolicy::default())
        .unwrap();
    assert!(matches!(forecast, ForecastResult::Empty(_)));
    assert_eq!(forecast.total_forecast().amounts, vec![0.0; 3]);
}

#[test]
fn malformed_values_report_their_row() {
    let bad_date = "Date,Amount\n01/05/2024,10\nnot-a-date,20\n";
    let err = read_ledger(bad_date.as_bytes(), &CsvImportOptions::default()).unwrap_err();
    assert!(matches!(&err, InsightsError::InvalidInput(msg) if msg.contains("row 2")));

    let bad_amount = "Date,Amount\n01/05/2024,ten\n";
    let err = read_ledger(bad_amount.as_bytes(), &CsvImportOptions::default()).unwrap_err();
    assert!(matches!(&err, InsightsError::InvalidInput(msg) if msg.contains("row 1")));

    let bad_kind = "Date,Amount,Transaction Type\n01/05/2024,10,transfer\n";
    let err = read_ledger(bad_kind.as_bytes(), &CsvImportOptions::default()).unwrap_err();
    assert!(matches!(err, InsightsError::InvalidInput(_)));
}

#[test]
fn custom_date_format_is_honoured() {
    let csv = "Date,Amount\n15.03.2024,10\n";
    let options = CsvImportOptions {
        date_format: "%d.%m.%Y".into(),
    };

    let view = read_ledger(csv.as_bytes(), &options).unwrap();

    assert_eq!(view.transactions()[0].date, date(2024, 3, 15));
}

#[test]
fn missing_file_is_a_storage_error() {
    let dir = temp_dir();
    let err = load_ledger(&dir.join("absent.csv"), &CsvImportOptions::default()).unwrap_err();
    assert!(matches!(err, InsightsError::StorageError(_)));
}
