use insights_domain::Transaction;

use crate::CoreError;

/// Rejects amounts the engines cannot reason about (negative, NaN or infinite).
pub fn validate_amounts(transactions: &[Transaction]) -> Result<(), CoreError> {
    if let Some((idx, txn)) = transactions
        .iter()
        .enumerate()
        .find(|(_, txn)| !txn.amount.is_finite() || txn.amount < 0.0)
    {
        return Err(CoreError::Validation(format!(
            "transaction {} (`{}` on {}) has invalid amount {}",
            idx + 1,
            txn.description,
            txn.date,
            txn.amount
        )));
    }
    Ok(())
}

pub fn validate_threshold(name: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}
