use std::io::Read;

use crate::application::AppError;
use crate::domain::Transaction;

/// Read a JSON export payload back into transactions, order preserved.
/// Id uniqueness is checked when the records are seeded into a store.
pub fn load_snapshot<R: Read>(reader: R) -> Result<Vec<Transaction>, AppError> {
    let transactions: Vec<Transaction> = serde_json::from_reader(reader)?;
    tracing::debug!(count = transactions.len(), "loaded ledger snapshot");
    Ok(transactions)
}
