use thiserror::Error;

use crate::domain::{ParseAmountError, ParseTypeError, TransactionId};
use crate::storage::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    #[error("No single transaction matches id '{0}'")]
    TransactionNotFoundByPrefix(String),

    #[error("Duplicate transaction id: {0}")]
    DuplicateTransactionId(TransactionId),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error("Invalid transaction type: {0}")]
    InvalidType(#[from] ParseTypeError),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Category must not be empty")]
    EmptyCategory,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateId(id) => AppError::DuplicateTransactionId(id),
        }
    }
}
