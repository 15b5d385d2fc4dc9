//! End-to-end persistence tests.
//!
//! These tests verify the snapshot layer against real files:
//! - save/load round-trips reproduce the book exactly
//! - the on-disk layout is a bare JSON object keyed by identifier
//! - missing and non-object files load as an empty book

use std::fs;

use rolodex::{load_from_path, save_to_path, Address, ContactBook, ContactPatch, NewContact};
use tempfile::tempdir;

fn populated_book() -> ContactBook {
    let mut book = ContactBook::new();
    book.insert(
        NewContact::new("Ada", "Lovelace", "(402) 555-1111")
            .email("ada@example.com")
            .category("work")
            .address(Address {
                street: "12 St James Sq".to_string(),
                city: "London".to_string(),
                state: "LN".to_string(),
                zip_code: "SW1Y".to_string(),
            })
            .notes("analytical engines"),
    )
    .unwrap();
    book.insert(NewContact::new("Grace", "Hopper", "212-555-0000"))
        .unwrap();
    book.insert(NewContact::new("Al", "Khwarizmi", "531-555-2222").category("family"))
        .unwrap();
    book
}

#[test]
fn round_trip_reproduces_an_equal_mapping() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");

    let book = populated_book();
    save_to_path(&book, &path).unwrap();

    let loaded = load_from_path(&path).unwrap();
    assert_eq!(loaded, book);
    assert_eq!(loaded.len(), 3);
}

#[test]
fn snapshot_layout_is_a_bare_object_keyed_by_identifier() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");

    let book = populated_book();
    save_to_path(&book, &path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let object = value.as_object().expect("top level must be an object");

    assert_eq!(object.len(), 3);
    assert!(object.contains_key("contact_001"));
    assert_eq!(object["contact_001"]["first_name"], "Ada");
    assert_eq!(object["contact_001"]["address"]["city"], "London");
    // No envelope: every top-level key is a contact identifier.
    assert!(object.keys().all(|key| key.starts_with("contact_")));
}

#[test]
fn round_trip_survives_mutation_between_sessions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");

    let mut book = populated_book();
    save_to_path(&book, &path).unwrap();

    // A second "session" edits and re-saves.
    let mut session = load_from_path(&path).unwrap();
    let (id, _) = session.find_by_phone("4025551111").map(|(i, c)| (i.clone(), c.clone())).unwrap();
    session
        .update(&id, ContactPatch::new().email("countess@example.com"))
        .unwrap();
    save_to_path(&session, &path).unwrap();

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded.get(&id).unwrap().email, "countess@example.com");
    assert_ne!(reloaded, book);
    book.update(&id, ContactPatch::new().email("countess@example.com"))
        .unwrap();
    assert_eq!(reloaded, book);
}

#[test]
fn missing_file_and_non_object_files_load_empty() {
    let dir = tempdir().unwrap();

    let absent = load_from_path(dir.path().join("nowhere.json")).unwrap();
    assert!(absent.is_empty());

    let path = dir.path().join("list.json");
    fs::write(&path, "[{\"first_name\": \"Ada\"}]").unwrap();
    let from_list = load_from_path(&path).unwrap();
    assert!(from_list.is_empty());
}

#[test]
fn loading_tolerates_records_with_only_required_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sparse.json");
    fs::write(
        &path,
        r#"{
            "contact_001": {
                "first_name": "Ada",
                "last_name": "Lovelace",
                "phone": "402-555-1111"
            }
        }"#,
    )
    .unwrap();

    let book = load_from_path(&path).unwrap();
    assert_eq!(book.len(), 1);
    let contact = book.get(&"contact_001".into()).unwrap();
    assert_eq!(contact.category, "personal");
    assert!(contact.email.is_empty());
    assert!(contact.address.is_blank());
}
