use chrono::NaiveDate;

use super::{NewTransaction, TransactionType};

/// Categories offered by the entry form before the user has typed any.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Groceries", "Bills", "Salary"];

/// Starting ledger for a fresh session: one salary payment and two expenses in June 2023.
pub fn demo_transactions() -> Vec<NewTransaction> {
    [
        (1, 1000.0, TransactionType::Income, "Salary"),
        (2, 50.0, TransactionType::Expense, "Groceries"),
        (3, 100.0, TransactionType::Expense, "Bills"),
    ]
    .into_iter()
    .filter_map(|(day, amount, kind, category)| {
        NaiveDate::from_ymd_opt(2023, 6, day)
            .map(|date| NewTransaction::new(date, amount, kind, category))
    })
    .collect()
}
