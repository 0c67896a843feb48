//! JSON persistence for budget inputs and exported reports.

pub mod json_backend;

pub use json_backend::{load_budgets, save_budgets, save_report};
