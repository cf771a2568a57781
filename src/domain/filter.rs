use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ParseTypeError, Transaction, TransactionType};

/// Selector value meaning "no constraint" for the type and category filters.
pub const ALL: &str = "all";

/// Conjunctive constraints narrowing the visible ledger.
/// Every unset field lets all transactions through; `Default` is the all-pass filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    /// Inclusive lower bound
    pub from_date: Option<NaiveDate>,
    /// Inclusive upper bound
    pub to_date: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_from_date(mut self, from_date: NaiveDate) -> Self {
        self.from_date = Some(from_date);
        self
    }

    pub fn with_to_date(mut self, to_date: NaiveDate) -> Self {
        self.to_date = Some(to_date);
        self
    }

    /// Build a filter from selector strings where `"all"` means unconstrained.
    pub fn from_selection(
        kind: &str,
        category: &str,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<Self, ParseTypeError> {
        Ok(Self {
            kind: parse_type_selection(kind)?,
            category: parse_category_selection(category),
            from_date,
            to_date,
        })
    }

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }

    /// True iff the transaction satisfies all four predicates.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &transaction.category != category {
                return false;
            }
        }
        if let Some(from) = self.from_date {
            if transaction.date < from {
                return false;
            }
        }
        if let Some(to) = self.to_date {
            if transaction.date > to {
                return false;
            }
        }
        true
    }
}

/// `"all"` -> `None`, otherwise the parsed type.
pub fn parse_type_selection(input: &str) -> Result<Option<TransactionType>, ParseTypeError> {
    if input.trim().eq_ignore_ascii_case(ALL) {
        Ok(None)
    } else {
        input.parse().map(Some)
    }
}

/// `"all"` -> `None`, otherwise the category verbatim.
pub fn parse_category_selection(input: &str) -> Option<String> {
    if input == ALL {
        None
    } else {
        Some(input.to_string())
    }
}
