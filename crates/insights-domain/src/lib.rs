//! insights-domain
//!
//! Pure data types for ledger analytics (transactions, monthly series, forecast,
//! anomaly and runway results). No I/O, no engines. Only data types and core enums.

pub mod anomaly;
pub mod common;
pub mod forecast;
pub mod runway;
pub mod transaction;

pub use anomaly::*;
pub use common::*;
pub use forecast::*;
pub use runway::*;
pub use transaction::*;
