use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Amount;

pub type TransactionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in (salary, refunds, ...)
    Income,
    /// Money going out (groceries, bills, ...)
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Sign applied to the amount when folding a balance.
    pub fn sign(&self) -> f64 {
        match self {
            TransactionType::Income => 1.0,
            TransactionType::Expense => -1.0,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ParseTypeError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTypeError(pub String);

impl std::fmt::Display for ParseTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown transaction type '{}' (expected income or expense)",
            self.0
        )
    }
}

impl std::error::Error for ParseTypeError {}

/// The user-supplied part of a transaction. Used both to create a record
/// and to replace the fields of an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
}

impl NewTransaction {
    pub fn new(
        date: NaiveDate,
        amount: Amount,
        kind: TransactionType,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            kind,
            category: category.into(),
        }
    }

    pub fn income(date: NaiveDate, amount: Amount, category: impl Into<String>) -> Self {
        Self::new(date, amount, TransactionType::Income, category)
    }

    pub fn expense(date: NaiveDate, amount: Amount, category: impl Into<String>) -> Self {
        Self::new(date, amount, TransactionType::Expense, category)
    }
}

/// A single income or expense entry in the ledger.
/// Field names and order double as the export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// Calendar day the money moved; ordering is chronological
    pub date: NaiveDate,
    /// Magnitude, never signed
    pub amount: Amount,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
}

impl Transaction {
    /// Build a stored record from user fields. Ids are handed out by the store.
    pub(crate) fn from_new(id: TransactionId, new: NewTransaction) -> Self {
        Self {
            id,
            date: new.date,
            amount: new.amount,
            kind: new.kind,
            category: new.category,
        }
    }

    /// Replace every user field, keeping the id.
    pub(crate) fn apply(&mut self, new: NewTransaction) {
        self.date = new.date;
        self.amount = new.amount;
        self.kind = new.kind;
        self.category = new.category;
    }

    /// Amount with the direction applied: positive for income, negative for expense.
    pub fn signed_amount(&self) -> Amount {
        self.kind.sign() * self.amount
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The user fields of this record, e.g. to prefill an edit form.
    pub fn to_new(&self) -> NewTransaction {
        NewTransaction {
            date: self.date,
            amount: self.amount,
            kind: self.kind,
            category: self.category.clone(),
        }
    }
}
