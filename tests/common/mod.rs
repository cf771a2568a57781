// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use saldo::application::LedgerService;
use saldo::domain::{Transaction, TransactionType};

/// Helper to create an empty test service
pub fn test_service() -> LedgerService {
    LedgerService::empty()
}

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Test fixture: a small ledger spanning two months
pub struct StandardLedger;

impl StandardLedger {
    /// Salary, groceries and bills on 2023-06-01..03, as in the demo ledger
    pub fn create_basic(service: &mut LedgerService) -> Vec<Transaction> {
        vec![
            service.create_transaction(
                parse_date("2023-06-01"),
                1000.0,
                TransactionType::Income,
                "Salary",
            ),
            service.create_transaction(
                parse_date("2023-06-02"),
                50.0,
                TransactionType::Expense,
                "Groceries",
            ),
            service.create_transaction(
                parse_date("2023-06-03"),
                100.0,
                TransactionType::Expense,
                "Bills",
            ),
        ]
    }

    /// Basic ledger plus a second month with repeated categories
    pub fn create_two_months(service: &mut LedgerService) -> Vec<Transaction> {
        let mut created = Self::create_basic(service);
        created.push(service.create_transaction(
            parse_date("2023-07-01"),
            1000.0,
            TransactionType::Income,
            "Salary",
        ));
        created.push(service.create_transaction(
            parse_date("2023-07-05"),
            80.25,
            TransactionType::Expense,
            "Groceries",
        ));
        created.push(service.create_transaction(
            parse_date("2023-07-09"),
            35.0,
            TransactionType::Expense,
            "Dining",
        ));
        created.push(service.create_transaction(
            parse_date("2023-07-20"),
            20.0,
            TransactionType::Income,
            "Refund",
        ));
        created
    }
}
