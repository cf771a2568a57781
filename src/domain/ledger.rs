use std::collections::HashSet;

use super::{ALL, Amount, Transaction, TransactionFilter};

/// Select the transactions satisfying every predicate of the filter.
/// Relative order of the input is preserved.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}

/// Selectable category options: `"all"` followed by every distinct category
/// in order of first occurrence across the given transactions.
pub fn list_categories(transactions: &[Transaction]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut categories = vec![ALL.to_string()];

    for transaction in transactions {
        if seen.insert(transaction.category.as_str()) {
            categories.push(transaction.category.clone());
        }
    }

    categories
}

/// Compute the balance of a sequence of transactions.
/// Balance = sum of income amounts - sum of expense amounts, folded left to right.
pub fn compute_balance(transactions: &[Transaction]) -> Amount {
    transactions
        .iter()
        .fold(0.0, |balance, transaction| balance + transaction.signed_amount())
}

/// Separate income and expense totals, each folded left to right.
pub fn compute_totals(transactions: &[Transaction]) -> (Amount, Amount) {
    transactions
        .iter()
        .fold((0.0, 0.0), |(income, expense), transaction| {
            if transaction.is_income() {
                (income + transaction.amount, expense)
            } else {
                (income, expense + transaction.amount)
            }
        })
}
