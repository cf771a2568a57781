use std::collections::HashSet;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::{NewTransaction, Transaction, TransactionId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate transaction id in snapshot: {0}")]
    DuplicateId(TransactionId),
}

/// In-memory store holding the authoritative, insertion-ordered list of transactions.
///
/// The store does not validate user fields; that belongs to whoever builds the
/// `NewTransaction`. It only guarantees that ids are unique among live records.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    /// Bumped by every create, and by every update or delete that found its target
    version: u64,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from previously exported records, keeping their ids and order.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for transaction in &transactions {
            if !seen.insert(transaction.id) {
                return Err(StoreError::DuplicateId(transaction.id));
            }
        }

        tracing::debug!(count = transactions.len(), "seeded transaction store");
        Ok(Self {
            transactions,
            version: 0,
        })
    }

    /// Append a new record under a fresh id and return the stored copy.
    pub fn create(&mut self, new: NewTransaction) -> Transaction {
        let id = self.fresh_id();
        let transaction = Transaction::from_new(id, new);
        self.transactions.push(transaction.clone());
        self.version += 1;

        tracing::debug!(%id, "created transaction");
        transaction
    }

    /// Replace every field of the record with this id. Position in the list is kept.
    /// Returns false (and changes nothing) when no record has the id.
    pub fn update(&mut self, id: TransactionId, new: NewTransaction) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(transaction) => {
                transaction.apply(new);
                self.version += 1;
                tracing::debug!(%id, "updated transaction");
                true
            }
            None => {
                tracing::debug!(%id, "update ignored, no such transaction");
                false
            }
        }
    }

    /// Remove the record with this id. Returns false when it was not present.
    pub fn delete(&mut self, id: TransactionId) -> bool {
        match self.transactions.iter().position(|t| t.id == id) {
            Some(index) => {
                self.transactions.remove(index);
                self.version += 1;
                tracing::debug!(%id, "deleted transaction");
                true
            }
            None => {
                tracing::debug!(%id, "delete ignored, no such transaction");
                false
            }
        }
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// All live records in insertion order.
    pub fn list_all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    // v4 collisions are not a practical concern, but seeded snapshots may carry any id.
    fn fresh_id(&self) -> TransactionId {
        loop {
            let id = Uuid::new_v4();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}
