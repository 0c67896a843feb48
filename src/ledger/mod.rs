//! In-memory ledger snapshots and CSV ingestion feeding the engines.

pub mod csv_import;
pub mod view;

pub use csv_import::{load_ledger, read_ledger, CsvImportOptions};
pub use view::{LedgerColumns, LedgerView};
