#![allow(clippy::unwrap_used)]

use chrono::{Local, TimeZone, Utc};
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;

fn storage() -> LocalStorage {
    Storage::new(Database::open_in_memory().unwrap())
}

fn expense(name: &str) -> Expense {
    Expense::new(name.into(), dec!(120), Category::Food, None, Utc::now())
}

fn budget(limit: rust_decimal::Decimal) -> Budget {
    let now = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    Budget::for_month(None, limit, &now)
}

/// Backend whose every call fails, for exercising the error paths.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Sqlite(rusqlite::Error::InvalidQuery))
    }
    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Sqlite(rusqlite::Error::InvalidQuery))
    }
    fn remove_item(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Sqlite(rusqlite::Error::InvalidQuery))
    }
}

// ── Expenses ──────────────────────────────────────────────────

#[test]
fn test_empty_storage_has_no_expenses() {
    assert!(storage().get_expenses().is_empty());
}

#[test]
fn test_add_expense_prepends() {
    let mut s = storage();
    s.add_expense(expense("first"));
    let list = s.add_expense(expense("second"));
    let names: Vec<&str> = list.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["second", "first"]);
    assert_eq!(s.get_expenses(), list);
}

#[test]
fn test_save_expenses_replaces_whole_list() {
    let mut s = storage();
    s.add_expense(expense("old"));
    let fresh = vec![expense("a"), expense("b")];
    s.save_expenses(&fresh);
    assert_eq!(s.get_expenses(), fresh);
}

#[test]
fn test_delete_expense_removes_only_matching_id() {
    let mut s = storage();
    let keep = expense("keep");
    let drop = expense("drop");
    s.add_expense(keep.clone());
    s.add_expense(drop.clone());

    let remaining = s.delete_expense(&drop.id);
    assert_eq!(remaining, vec![keep.clone()]);
    assert_eq!(s.get_expenses(), vec![keep]);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut s = storage();
    s.add_expense(expense("a"));
    let remaining = s.delete_expense("not-an-id");
    assert_eq!(remaining.len(), 1);
}

#[test]
fn test_expense_round_trips_through_storage() {
    let mut s = storage();
    let mut e = expense("Pharmacy");
    e.category = Category::Health;
    e.amount = dec!(249.5);
    e.description = Some("cough syrup".into());
    e.date = Utc.with_ymd_and_hms(2024, 2, 29, 8, 15, 0).unwrap();
    s.add_expense(e.clone());
    assert_eq!(s.get_expenses(), vec![e]);
}

#[test]
fn test_malformed_expenses_read_as_empty() {
    let mut s = storage();
    s.store_mut().set_item(EXPENSES_KEY, "{not json").unwrap();
    assert!(s.get_expenses().is_empty());
}

#[test]
fn test_wrong_shape_expenses_read_as_empty() {
    let mut s = storage();
    let unknown_category =
        r#"[{"id":"x","name":"n","amount":5,"category":"pets","date":"2024-01-01T00:00:00Z"}]"#;
    s.store_mut().set_item(EXPENSES_KEY, unknown_category).unwrap();
    assert!(s.get_expenses().is_empty());
}

#[test]
fn test_blank_value_reads_as_empty() {
    let mut s = storage();
    s.store_mut().set_item(EXPENSES_KEY, "").unwrap();
    s.store_mut().set_item(BUDGET_KEY, "  ").unwrap();
    assert!(s.get_expenses().is_empty());
    assert!(s.get_budget().is_none());
}

#[test]
fn test_add_after_malformed_data_starts_fresh() {
    let mut s = storage();
    s.store_mut().set_item(EXPENSES_KEY, "garbage").unwrap();
    let list = s.add_expense(expense("recovered"));
    assert_eq!(list.len(), 1);
    assert_eq!(s.get_expenses().len(), 1);
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_no_budget_by_default() {
    assert!(storage().get_budget().is_none());
}

#[test]
fn test_save_budget_overwrites() {
    let mut s = storage();
    s.save_budget(&budget(dec!(5000)));
    let second = budget(dec!(8000));
    s.save_budget(&second);
    assert_eq!(s.get_budget(), Some(second));
}

#[test]
fn test_malformed_budget_reads_as_none() {
    let mut s = storage();
    s.store_mut().set_item(BUDGET_KEY, "[1, 2, 3]").unwrap();
    assert!(s.get_budget().is_none());
}

#[test]
fn test_budget_and_expenses_are_independent_records() {
    let mut s = storage();
    s.save_budget(&budget(dec!(1000)));
    s.store_mut().set_item(EXPENSES_KEY, "oops").unwrap();
    assert!(s.get_expenses().is_empty());
    assert!(s.get_budget().is_some());
}

// ── Clear ─────────────────────────────────────────────────────

#[test]
fn test_clear_all_data() {
    let mut s = storage();
    s.add_expense(expense("a"));
    s.save_budget(&budget(dec!(1000)));
    s.clear_all_data();
    assert!(s.get_expenses().is_empty());
    assert!(s.get_budget().is_none());
    assert_eq!(s.store_mut().key_count().unwrap(), 0);
}

// ── Failing backend ───────────────────────────────────────────

#[test]
fn test_backend_failures_degrade_quietly() {
    let mut s = Storage::new(BrokenStore);
    assert!(s.get_expenses().is_empty());
    assert!(s.get_budget().is_none());
    s.save_budget(&budget(dec!(10)));
    s.clear_all_data();
    // The returned list reflects the attempted change even though the write failed.
    let list = s.add_expense(expense("lost"));
    assert_eq!(list.len(), 1);
    assert!(s.delete_expense(&list[0].id).is_empty());
}
