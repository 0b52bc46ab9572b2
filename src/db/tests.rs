#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_missing_key_is_none() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get_item("nope").unwrap(), None);
}

#[test]
fn test_set_then_get() {
    let mut db = Database::open_in_memory().unwrap();
    db.set_item("greeting", "hello").unwrap();
    assert_eq!(db.get_item("greeting").unwrap().as_deref(), Some("hello"));
}

#[test]
fn test_set_overwrites_existing_value() {
    let mut db = Database::open_in_memory().unwrap();
    db.set_item("k", "first").unwrap();
    db.set_item("k", "second").unwrap();
    assert_eq!(db.get_item("k").unwrap().as_deref(), Some("second"));
    assert_eq!(db.key_count().unwrap(), 1);
}

#[test]
fn test_remove_item() {
    let mut db = Database::open_in_memory().unwrap();
    db.set_item("a", "1").unwrap();
    db.set_item("b", "2").unwrap();
    db.remove_item("a").unwrap();
    assert_eq!(db.get_item("a").unwrap(), None);
    assert_eq!(db.get_item("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_remove_missing_key_is_ok() {
    let mut db = Database::open_in_memory().unwrap();
    db.remove_item("ghost").unwrap();
    assert_eq!(db.key_count().unwrap(), 0);
}

#[test]
fn test_values_keep_unicode() {
    let mut db = Database::open_in_memory().unwrap();
    db.set_item("note", "chai ☕ ₹20 🐰").unwrap();
    assert_eq!(db.get_item("note").unwrap().as_deref(), Some("chai ☕ ₹20 🐰"));
}

#[test]
fn test_open_file_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bunnybudget.db");
    {
        let mut db = Database::open(&path).unwrap();
        db.set_item("k", "v").unwrap();
    }
    let db = Database::open(&path).unwrap();
    assert_eq!(db.get_item("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_open_bad_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("x.db");
    assert!(Database::open(&path).is_err());
}
