//! Tests for the nested document type.

use serde::{Deserialize, Serialize};
use trellis::doc::{Doc, Value};

#[test]
fn test_children_keep_insertion_order() {
    let mut doc = Doc::new();
    doc.set("zulu", 1);
    doc.set("alpha", 2);
    doc.set("mike", 3);

    let keys: Vec<&String> = doc.keys().collect();
    assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
}

#[test]
fn test_remove_preserves_sibling_order() {
    let mut doc = Doc::new();
    doc.set("a", 1);
    doc.set("b", 2);
    doc.set("c", 3);

    doc.remove("b");
    let keys: Vec<&String> = doc.keys().collect();
    assert_eq!(keys, vec!["a", "c"]);
}

#[test]
fn test_overwrite_keeps_original_position() {
    let mut doc = Doc::new();
    doc.set("first", 1);
    doc.set("second", 2);
    doc.set("first", 10);

    let keys: Vec<&String> = doc.keys().collect();
    assert_eq!(keys, vec!["first", "second"]);
    assert_eq!(doc.get_as::<i64>("first"), Some(10));
}

#[test]
fn test_set_path_empty_path_is_error() {
    let mut doc = Doc::new();
    let err = doc.set_path("", 1).unwrap_err();
    assert!(err.is_path_error());
    assert!(doc.is_empty());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    age: i64,
}

#[test]
fn test_json_round_trip() {
    let profile = Profile {
        name: "Alice".to_string(),
        age: 30,
    };

    let mut doc = Doc::new();
    doc.set_json("profile", &profile).unwrap();

    let back: Profile = doc.get_json("profile").unwrap();
    assert_eq!(back, profile);
}

#[test]
fn test_get_json_errors() {
    let mut doc = Doc::new();
    doc.set("num", 5);

    let missing = doc.get_json::<Profile>("absent").unwrap_err();
    assert_eq!(missing.module(), "doc");

    let not_text = doc.get_json::<Profile>("num");
    assert!(not_text.is_err());
}

#[test]
fn test_serde_round_trip() {
    let doc = Doc::new()
        .with_text("name", "Alice")
        .with_doc("nested", Doc::new().with_int("depth", 1))
        .with_bool("active", true);

    let json = serde_json::to_string(&doc).unwrap();
    let back: Doc = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_builder_and_display() {
    let doc = Doc::new().with_int("a", 1).with_text("b", "two");
    assert_eq!(format!("{doc}"), "{a: 1, b: two}");
    assert_eq!(doc.get("a"), Some(&Value::Int(1)));
}
