//! Reads ledger CSV exports with `Date`, `Description`, `Category`, `Amount`,
//! `Transaction Type` and `Account Name` columns.

use std::{fs::File, io, path::Path, str::FromStr};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use insights_domain::{Transaction, TransactionKind};
use tracing::{debug, warn};

use crate::{
    errors::{InsightsError, Result},
    ledger::view::{LedgerColumns, LedgerView},
};

const DATE_COLUMN: &str = "Date";
const DESCRIPTION_COLUMN: &str = "Description";
const CATEGORY_COLUMN: &str = "Category";
const AMOUNT_COLUMN: &str = "Amount";
const KIND_COLUMN: &str = "Transaction Type";
const ACCOUNT_COLUMN: &str = "Account Name";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct CsvImportOptions {
    /// Primary `chrono` format for the date column; ISO dates are always accepted.
    pub date_format: String,
}

impl Default for CsvImportOptions {
    fn default() -> Self {
        Self {
            date_format: "%m/%d/%Y".into(),
        }
    }
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    date: Option<usize>,
    description: Option<usize>,
    category: Option<usize>,
    amount: Option<usize>,
    kind: Option<usize>,
    account: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(name))
        };
        Self {
            date: find(DATE_COLUMN),
            description: find(DESCRIPTION_COLUMN),
            category: find(CATEGORY_COLUMN),
            amount: find(AMOUNT_COLUMN),
            kind: find(KIND_COLUMN),
            account: find(ACCOUNT_COLUMN),
        }
    }

    fn columns(&self) -> LedgerColumns {
        LedgerColumns {
            date: self.date.is_some(),
            description: self.description.is_some(),
            category: self.category.is_some(),
            amount: self.amount.is_some(),
            kind: self.kind.is_some(),
            account: self.account.is_some(),
        }
    }
}

pub fn load_ledger(path: &Path, options: &CsvImportOptions) -> Result<LedgerView> {
    let file = File::open(path).map_err(|err| {
        InsightsError::StorageError(format!("cannot open ledger {}: {err}", path.display()))
    })?;
    read_ledger(file, options)
}

/// Parses a ledger from any CSV reader.
///
/// A ledger without `Date` or `Amount` columns yields an empty view flagged as such;
/// malformed values are reported with their 1-based data row number.
pub fn read_ledger<R: io::Read>(reader: R, options: &CsvImportOptions) -> Result<LedgerView> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let index = ColumnIndex::from_headers(reader.headers()?);
    let columns = index.columns();

    let (Some(date_idx), Some(amount_idx)) = (index.date, index.amount) else {
        warn!(
            has_date = columns.date,
            has_amount = columns.amount,
            "ledger is missing required columns"
        );
        return Ok(LedgerView::new(Vec::new(), columns));
    };

    let mut transactions = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 1;
        let cell = |column: Option<usize>| {
            column
                .and_then(|pos| record.get(pos))
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        let date = parse_date(cell(Some(date_idx)), &options.date_format, row)?;
        let amount = parse_amount(cell(Some(amount_idx)), row)?;
        let kind = cell(index.kind)
            .map(|raw| {
                TransactionKind::from_str(raw)
                    .map_err(|err| InsightsError::InvalidInput(format!("row {row}: {err}")))
            })
            .transpose()?;

        transactions.push(Transaction {
            date,
            description: cell(index.description).unwrap_or_default().to_string(),
            category: cell(index.category).map(str::to_string),
            amount,
            kind,
            account: cell(index.account).map(str::to_string),
        });
    }

    debug!(rows = transactions.len(), "ledger imported");
    Ok(LedgerView::new(transactions, columns))
}

fn parse_date(raw: Option<&str>, format: &str, row: usize) -> Result<NaiveDate> {
    let raw =
        raw.ok_or_else(|| InsightsError::InvalidInput(format!("row {row}: missing date")))?;
    NaiveDate::parse_from_str(raw, format)
        .or_else(|_| NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT))
        .map_err(|_| InsightsError::InvalidInput(format!("row {row}: invalid date `{raw}`")))
}

fn parse_amount(raw: Option<&str>, row: usize) -> Result<f64> {
    let raw =
        raw.ok_or_else(|| InsightsError::InvalidInput(format!("row {row}: missing amount")))?;
    let amount: f64 = raw
        .replace(',', "")
        .parse()
        .map_err(|_| InsightsError::InvalidInput(format!("row {row}: invalid amount `{raw}`")))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(InsightsError::InvalidInput(format!(
            "row {row}: amount must be a non-negative number, got `{raw}`"
        )));
    }
    Ok(amount)
}
