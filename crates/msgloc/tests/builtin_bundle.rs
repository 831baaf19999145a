//! Tests for the built-in language tables.

use msgloc::{LanguageManager, Locale, builtin};

#[test]
fn every_table_translates_every_key() {
    for set in builtin::languages() {
        let missing: Vec<&str> = builtin::KEYS
            .iter()
            .copied()
            .filter(|key| !set.contains_key(key))
            .collect();
        assert!(missing.is_empty(), "{} is missing {missing:?}", set.code());
        assert_eq!(set.len(), builtin::KEYS.len(), "{} has extra keys", set.code());
    }
}

#[test]
fn no_translation_is_empty() {
    for set in builtin::languages() {
        for (key, text) in set.iter() {
            assert!(!text.trim().is_empty(), "{}:{key} is empty", set.code());
        }
    }
}

#[test]
fn placeholders_survive_translation() {
    for set in builtin::languages() {
        for (key, text) in set.iter() {
            assert!(
                text.contains("{PropertyName}"),
                "{}:{key} drops the property name",
                set.code()
            );
        }
    }
}

#[test]
fn codes_are_valid_locales() {
    for code in builtin::codes() {
        let locale = Locale::parse(code).unwrap();
        assert_eq!(locale.code(), code);
    }
}

#[test]
fn length_messages_are_distinct_in_english() {
    let manager = LanguageManager::new();
    let en = Locale::english();
    let length = manager.resolve("LengthValidator", Some(&en));
    let minimum = manager.resolve("MinimumLengthValidator", Some(&en));
    let maximum = manager.resolve("MaximumLengthValidator", Some(&en));
    assert_ne!(length, minimum);
    assert_ne!(minimum, maximum);
}
