use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Transaction, compute_balance, compute_totals};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeExpenseSummary {
    pub total_income: Amount,
    pub total_expense: Amount,
    pub net: Amount,
    pub count: usize,
}

impl IncomeExpenseSummary {
    /// `net` is the signed fold, so it always equals the balance of the same view.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let (total_income, total_expense) = compute_totals(transactions);
        Self {
            total_income,
            total_expense,
            net: compute_balance(transactions),
            count: transactions.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub income: Amount,
    pub expense: Amount,
    pub net: Amount,
    pub count: usize,
}

/// Per-category totals, in order of first occurrence of each category.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for transaction in transactions {
        let index = match summaries
            .iter()
            .position(|s| s.category == transaction.category)
        {
            Some(index) => index,
            None => {
                summaries.push(CategorySummary {
                    category: transaction.category.clone(),
                    income: 0.0,
                    expense: 0.0,
                    net: 0.0,
                    count: 0,
                });
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[index];
        if transaction.is_income() {
            summary.income += transaction.amount;
        } else {
            summary.expense += transaction.amount;
        }
        summary.net += transaction.signed_amount();
        summary.count += 1;
    }

    summaries
}
