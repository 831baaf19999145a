//! Tests for TranslationSet construction and lookup.

use msgloc::{TranslationSet, translations};

#[test]
fn new_set_is_empty() {
    let set = TranslationSet::new("fr");
    assert_eq!(set.code(), "fr");
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn insert_replaces_existing_text() {
    let mut set = TranslationSet::new("fr");
    assert_eq!(set.insert("k", "first"), None);
    assert_eq!(set.insert("k", "second"), Some("first".to_string()));
    assert_eq!(set.get("k"), Some("second"));
    assert_eq!(set.len(), 1);
}

#[test]
fn keys_are_sorted() {
    let set = translations!("en"; "b" => "B", "a" => "A", "C" => "c");
    let keys: Vec<&str> = set.keys().collect();
    assert_eq!(keys, vec!["C", "a", "b"]);
}

#[test]
fn from_entries_collects_pairs() {
    let set = TranslationSet::from_entries("de", [("x", "X"), ("y", "Y")]);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![("x", "X"), ("y", "Y")]);
    assert!(set.contains_key("x"));
    assert!(!set.contains_key("X"));
}

#[test]
fn builder_accepts_translations_map() {
    let set = TranslationSet::builder()
        .code("es")
        .translations([("k".to_string(), "v".to_string())].into_iter().collect())
        .build();
    assert_eq!(set.get("k"), Some("v"));
}

#[test]
fn parse_builds_set_from_file_text() {
    let set = TranslationSet::parse("it", "a = \"A\";\nb = \"B\";").unwrap();
    assert_eq!(set.code(), "it");
    assert_eq!(set.len(), 2);
    assert_eq!(set.get("b"), Some("B"));
}

#[test]
fn serde_round_trip_preserves_table() {
    let set = translations!("nl"; "k" => "v");
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"{"code":"nl","translations":{"k":"v"}}"#);
    let back: TranslationSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn deserialize_defaults_missing_translations() {
    let set: TranslationSet = serde_json::from_str(r#"{"code":"pl"}"#).unwrap();
    assert!(set.is_empty());
}
