mod common;

use std::collections::HashSet;

use common::{StandardLedger, parse_date, test_service};
use saldo::domain::{TransactionFilter, TransactionType};

#[test]
fn test_created_ids_are_unique() {
    let mut service = test_service();
    let mut ids = HashSet::new();

    for i in 0..100 {
        let tx = service.create_transaction(
            parse_date("2023-06-01"),
            i as f64,
            TransactionType::Expense,
            "Groceries",
        );
        assert!(ids.insert(tx.id), "duplicate id {}", tx.id);
    }
}

#[test]
fn test_create_then_list_contains_record_unchanged() {
    let mut service = test_service();
    StandardLedger::create_basic(&mut service);

    let created = service.create_transaction(
        parse_date("2023-06-04"),
        12.75,
        TransactionType::Expense,
        "Dining",
    );

    let all = service.get_filtered_transactions(&TransactionFilter::all());
    assert_eq!(all.last(), Some(&created));
    assert_eq!(service.get_transaction(created.id), Some(&created));
    assert_eq!(all.iter().filter(|t| t.id == created.id).count(), 1);
}

#[test]
fn test_update_is_idempotent() {
    let mut service = test_service();
    let created = StandardLedger::create_basic(&mut service);
    let target = created[1].id;

    assert!(service.update_transaction(
        target,
        parse_date("2023-06-05"),
        65.0,
        TransactionType::Expense,
        "Groceries",
    ));
    let once = service.list_transactions().to_vec();

    assert!(service.update_transaction(
        target,
        parse_date("2023-06-05"),
        65.0,
        TransactionType::Expense,
        "Groceries",
    ));
    assert_eq!(service.list_transactions(), once.as_slice());

    // Position in the ledger is kept
    assert_eq!(service.list_transactions()[1].id, target);
}

#[test]
fn test_update_and_delete_unknown_id_are_noops() {
    let mut service = test_service();
    StandardLedger::create_basic(&mut service);
    let before = service.list_transactions().to_vec();
    let version = service.store().version();
    let unknown = uuid::Uuid::new_v4();

    assert!(!service.update_transaction(
        unknown,
        parse_date("2023-06-05"),
        1.0,
        TransactionType::Income,
        "X",
    ));
    assert!(!service.delete_transaction(unknown));

    assert_eq!(service.list_transactions(), before.as_slice());
    assert_eq!(service.store().version(), version);
}

#[test]
fn test_filter_is_conjunction_of_predicates() {
    let mut service = test_service();
    let created = StandardLedger::create_two_months(&mut service);

    let kinds = [None, Some(TransactionType::Income), Some(TransactionType::Expense)];
    let categories = [None, Some("Salary"), Some("Groceries"), Some("Nope")];
    let bounds = [None, Some("2023-06-02"), Some("2023-07-01"), Some("2023-07-20")];

    for kind in kinds {
        for category in categories {
            for from in bounds {
                for to in bounds {
                    let filter = TransactionFilter {
                        kind,
                        category: category.map(str::to_string),
                        from_date: from.map(parse_date),
                        to_date: to.map(parse_date),
                    };

                    let result = service.get_filtered_transactions(&filter);
                    let expected: Vec<_> = created
                        .iter()
                        .filter(|t| {
                            kind.is_none_or(|k| t.kind == k)
                                && category.is_none_or(|c| t.category == c)
                                && from.is_none_or(|f| t.date >= parse_date(f))
                                && to.is_none_or(|d| t.date <= parse_date(d))
                        })
                        .cloned()
                        .collect();

                    assert_eq!(result, expected, "filter {:?}", filter);
                }
            }
        }
    }
}

#[test]
fn test_balance_of_demo_sequence() {
    let mut service = test_service();
    let created = StandardLedger::create_basic(&mut service);

    assert_eq!(service.get_balance(&created), 850.0);
}

#[test]
fn test_empty_store() {
    let service = test_service();
    let filtered = service.get_filtered_transactions(&TransactionFilter::all());

    assert!(filtered.is_empty());
    assert_eq!(service.get_balance(&[]), 0.0);
    assert_eq!(service.get_categories(), vec!["all"]);
}

#[test]
fn test_single_day_range() {
    let mut service = test_service();
    let created = StandardLedger::create_basic(&mut service);

    let filter = TransactionFilter::all()
        .with_from_date(parse_date("2023-06-02"))
        .with_to_date(parse_date("2023-06-02"));
    let result = service.get_filtered_transactions(&filter);

    assert_eq!(result, vec![created[1].clone()]);
}

#[test]
fn test_deleted_record_never_reappears() {
    let mut service = test_service();
    let created = StandardLedger::create_two_months(&mut service);
    let removed = created[4].id;

    assert!(service.delete_transaction(removed));

    let filters = [
        TransactionFilter::all(),
        TransactionFilter::all().with_type(TransactionType::Expense),
        TransactionFilter::all().with_category("Groceries"),
        TransactionFilter::all().with_from_date(parse_date("2023-07-05")),
        TransactionFilter::all().with_to_date(parse_date("2023-07-05")),
    ];
    for filter in &filters {
        let result = service.get_filtered_transactions(filter);
        assert!(result.iter().all(|t| t.id != removed), "filter {:?}", filter);
    }
}

#[test]
fn test_categories_cover_whole_ledger_not_filter() {
    let mut service = test_service();
    StandardLedger::create_two_months(&mut service);

    assert_eq!(
        service.get_categories(),
        vec!["all", "Salary", "Groceries", "Bills", "Dining", "Refund"]
    );
}

#[test]
fn test_categories_follow_updates_and_deletes() {
    let mut service = test_service();
    let created = StandardLedger::create_basic(&mut service);

    service.update_transaction(
        created[2].id,
        parse_date("2023-06-03"),
        100.0,
        TransactionType::Expense,
        "Rent",
    );
    service.delete_transaction(created[1].id);

    assert_eq!(service.get_categories(), vec!["all", "Salary", "Rent"]);
}

#[test]
fn test_version_counts_effective_mutations() {
    let mut service = test_service();
    assert_eq!(service.store().version(), 0);

    let created = StandardLedger::create_basic(&mut service);
    assert_eq!(service.store().version(), 3);

    service.delete_transaction(created[0].id);
    service.delete_transaction(created[0].id);
    assert_eq!(service.store().version(), 4);
}

#[test]
fn test_filtering_does_not_mutate_store() {
    let mut service = test_service();
    StandardLedger::create_two_months(&mut service);
    let before = service.list_transactions().to_vec();
    let version = service.store().version();

    let _ = service.get_filtered_transactions(
        &TransactionFilter::all().with_type(TransactionType::Income),
    );

    assert_eq!(service.list_transactions(), before.as_slice());
    assert_eq!(service.store().version(), version);
}
