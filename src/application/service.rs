use chrono::NaiveDate;

use crate::domain::{
    Amount, NewTransaction, Transaction, TransactionFilter, TransactionId, TransactionType,
    compute_balance, demo_transactions, filter_transactions, list_categories,
};
use crate::io::Exporter;
use crate::storage::TransactionStore;

use super::{AppError, CategorySummary, IncomeExpenseSummary, category_breakdown};

/// Application service providing high-level operations for the ledger.
/// This is the primary interface for any client (CLI, TUI, tests).
#[derive(Debug, Default)]
pub struct LedgerService {
    store: TransactionStore,
}

impl LedgerService {
    /// Create a service around an existing store.
    pub fn new(store: TransactionStore) -> Self {
        Self { store }
    }

    /// Start from an empty ledger.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start from the demo ledger (salary, groceries, bills in June 2023).
    pub fn with_demo_data() -> Self {
        let mut store = TransactionStore::new();
        for new in demo_transactions() {
            store.create(new);
        }
        Self::new(store)
    }

    /// Start from previously exported records.
    pub fn from_snapshot(transactions: Vec<Transaction>) -> Result<Self, AppError> {
        Ok(Self::new(TransactionStore::from_transactions(transactions)?))
    }

    /// Read-only access to the underlying store, e.g. for its version counter.
    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    // ========================
    // Mutations
    // ========================

    /// Record a new transaction and return it with its assigned id.
    pub fn create_transaction(
        &mut self,
        date: NaiveDate,
        amount: Amount,
        kind: TransactionType,
        category: impl Into<String>,
    ) -> Transaction {
        self.store
            .create(NewTransaction::new(date, amount, kind, category))
    }

    /// Replace the fields of a transaction. Returns false if the id is unknown.
    pub fn update_transaction(
        &mut self,
        id: TransactionId,
        date: NaiveDate,
        amount: Amount,
        kind: TransactionType,
        category: impl Into<String>,
    ) -> bool {
        self.store
            .update(id, NewTransaction::new(date, amount, kind, category))
    }

    /// Like `update_transaction`, but an unknown id is an error.
    pub fn try_update_transaction(
        &mut self,
        id: TransactionId,
        date: NaiveDate,
        amount: Amount,
        kind: TransactionType,
        category: impl Into<String>,
    ) -> Result<(), AppError> {
        if self.update_transaction(id, date, amount, kind, category) {
            Ok(())
        } else {
            Err(AppError::TransactionNotFound(id))
        }
    }

    /// Remove a transaction. Returns false if the id is unknown.
    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        self.store.delete(id)
    }

    /// Like `delete_transaction`, but an unknown id is an error.
    pub fn try_delete_transaction(&mut self, id: TransactionId) -> Result<(), AppError> {
        if self.delete_transaction(id) {
            Ok(())
        } else {
            Err(AppError::TransactionNotFound(id))
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn get_transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.store.get(id)
    }

    /// Resolve a full id or a unique id prefix (as shown by the CLI listing).
    pub fn find_by_id_prefix(&self, prefix: &str) -> Result<&Transaction, AppError> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Err(AppError::TransactionNotFoundByPrefix(prefix));
        }

        let matches: Vec<&Transaction> = self
            .store
            .list_all()
            .iter()
            .filter(|t| t.id.to_string().starts_with(&prefix))
            .collect();

        match matches.as_slice() {
            [transaction] => Ok(*transaction),
            _ => Err(AppError::TransactionNotFoundByPrefix(prefix)),
        }
    }

    pub fn list_transactions(&self) -> &[Transaction] {
        self.store.list_all()
    }

    pub fn get_filtered_transactions(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let filtered = filter_transactions(self.store.list_all(), filter);
        tracing::debug!(
            total = self.store.len(),
            visible = filtered.len(),
            "applied transaction filter"
        );
        filtered
    }

    /// Category options across the whole ledger, `"all"` first.
    pub fn get_categories(&self) -> Vec<String> {
        list_categories(self.store.list_all())
    }

    pub fn get_balance(&self, transactions: &[Transaction]) -> Amount {
        compute_balance(transactions)
    }

    pub fn summarize(&self, transactions: &[Transaction]) -> IncomeExpenseSummary {
        IncomeExpenseSummary::from_transactions(transactions)
    }

    pub fn category_breakdown(&self, transactions: &[Transaction]) -> Vec<CategorySummary> {
        category_breakdown(transactions)
    }

    /// Serialize the given (usually filtered) transactions to the JSON export payload.
    pub fn export_snapshot(&self, transactions: &[Transaction]) -> Result<String, AppError> {
        Ok(Exporter::new(transactions).json_payload()?)
    }
}
