#![doc(test(attr(deny(warnings))))]

//! Spend Insights turns a personal transaction ledger into spending forecasts,
//! anomaly reports and budget runway estimates.
//!
//! The engines live in `insights_core`; this crate adds ledger ingestion, JSON
//! storage, configuration and the command-line front end.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

pub use insights_core as engines;
pub use insights_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spend Insights tracing initialized.");
    });
}
