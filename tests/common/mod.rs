#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use spend_insights::domain::{Transaction, TransactionKind};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn debit(on: NaiveDate, category: &str, amount: f64) -> Transaction {
    Transaction::debit(on, format!("{category} purchase"), amount).with_category(category)
}

/// One debit per month starting January 2024, on the 15th.
pub fn monthly_debits(category: &str, amounts: &[f64]) -> Vec<Transaction> {
    amounts
        .iter()
        .enumerate()
        .map(|(idx, amount)| {
            let month = idx as u32 % 12 + 1;
            let year = 2024 + idx as i32 / 12;
            debit(date(year, month, 15), category, *amount)
        })
        .collect()
}

/// Rows spread over the first days of March 2024 in a single category.
pub fn same_month(category: &str, amounts: &[f64]) -> Vec<Transaction> {
    amounts
        .iter()
        .enumerate()
        .map(|(idx, amount)| debit(date(2024, 3, idx as u32 + 1), category, *amount))
        .collect()
}

pub fn credit(on: NaiveDate, category: &str, amount: f64) -> Transaction {
    Transaction::new(on, format!("{category} deposit"), amount)
        .with_category(category)
        .with_kind(TransactionKind::Credit)
}

pub const SAMPLE_CSV: &str = "\
Date,Description,Category,Amount,Transaction Type,Account Name
01/05/2024,Rent,Housing,1200.00,debit,Checking
01/12/2024,Groceries,Food,85.40,debit,Credit Card
01/31/2024,Salary,Income,3000.00,credit,Checking
02/05/2024,Rent,Housing,1200.00,debit,Checking
02/14/2024,Dinner,Food,140.00,debit,Credit Card
2024-02-28,Salary,Income,3000.00,credit,Checking
03/05/2024,Rent,Housing,1200.00,debit,Checking
03/09/2024,Groceries,Food,92.10,debit,Credit Card
03/20/2024,Television,Electronics,1499.99,debit,Credit Card
";
