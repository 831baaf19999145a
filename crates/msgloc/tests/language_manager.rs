//! Integration tests for registry construction and mutation.

use std::sync::Arc;

use msgloc::{LanguageError, LanguageManager, Locale, TranslationSet, builtin, translations};

fn locale(code: &str) -> Locale {
    Locale::parse(code).unwrap()
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn new_manager_is_seeded_with_builtin_languages() {
    let manager = LanguageManager::new();
    let codes: Vec<String> = manager
        .supported_languages()
        .iter()
        .map(|set| set.code().to_string())
        .collect();
    let expected: Vec<&str> = builtin::codes().collect();
    assert_eq!(codes, expected);
}

#[test]
fn new_manager_defaults() {
    let manager = LanguageManager::new();
    assert!(manager.enabled());
    assert_eq!(manager.culture().code(), "en");
    assert_eq!(manager.fallback_language().code(), "en");
    assert!(!manager.has_legacy_provider());
}

#[test]
fn builder_sets_options() {
    let manager = LanguageManager::builder()
        .enabled(false)
        .culture(locale("de-AT"))
        .build();
    assert!(!manager.enabled());
    assert_eq!(manager.culture().code(), "de-AT");
    assert_eq!(manager.fallback_language().code(), "en");
}

// =========================================================================
// add_language
// =========================================================================

#[test]
fn add_language_registers_new_code() {
    let mut manager = LanguageManager::new();
    manager
        .add_language(translations!("eo"; "NotNullValidator" => "ne estu malplena"))
        .unwrap();

    assert!(manager.is_registered("eo"));
    assert_eq!(
        manager.language("eo").unwrap().get("NotNullValidator"),
        Some("ne estu malplena")
    );
}

#[test]
fn add_language_overwrites_existing_code() {
    let mut manager = LanguageManager::new();
    manager
        .add_language(translations!("fr"; "a" => "first", "b" => "only first"))
        .unwrap();
    manager
        .add_language(translations!("fr"; "a" => "second"))
        .unwrap();

    let fr = locale("fr");
    assert_eq!(manager.resolve("a", Some(&fr)), "second");
    assert_eq!(manager.resolve("b", Some(&fr)), "");
}

#[test]
fn add_language_is_idempotent() {
    let mut manager = LanguageManager::new();
    let set = translations!("sv"; "k" => "v");
    manager.add_language(set.clone()).unwrap();
    manager.add_language(set).unwrap();

    let count = manager
        .supported_languages()
        .iter()
        .filter(|s| s.code() == "sv")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn add_language_rejects_empty_code() {
    let mut manager = LanguageManager::new();
    let err = manager.add_language(TranslationSet::new("")).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid language code: language code must not be empty");
}

#[test]
fn add_language_rejects_blank_code() {
    let mut manager = LanguageManager::new();
    let err = manager.add_language(TranslationSet::new("   ")).unwrap_err();
    assert!(matches!(
        err,
        LanguageError::InvalidArgument {
            argument: "language code",
            ..
        }
    ));
}

// =========================================================================
// add_translation
// =========================================================================

#[test]
fn add_translation_creates_missing_language() {
    let mut manager = LanguageManager::new();
    manager
        .add_translation("fi", "NotNullValidator", "ei saa olla tyhjä")
        .unwrap();

    assert_eq!(
        manager.resolve("NotNullValidator", Some(&locale("fi-FI"))),
        "ei saa olla tyhjä"
    );
}

#[test]
fn add_translation_edits_builtin_copy_only() {
    let mut edited = LanguageManager::new();
    edited
        .add_translation("fr", "NotNullValidator", "requis")
        .unwrap();

    let untouched = LanguageManager::new();
    let fr = locale("fr");
    assert_eq!(edited.resolve("NotNullValidator", Some(&fr)), "requis");
    assert_eq!(
        untouched.resolve("NotNullValidator", Some(&fr)),
        "'{PropertyName}' ne doit pas avoir la valeur null."
    );
}

#[test]
fn add_translation_to_fallback_code_updates_fallback() {
    let mut manager = LanguageManager::new();
    manager.add_translation("en", "custom_key", "Custom").unwrap();

    assert_eq!(manager.fallback_language().get("custom_key"), Some("Custom"));
    assert_eq!(manager.resolve("custom_key", Some(&locale("ja"))), "Custom");
}

#[test]
fn add_translation_rejects_empty_key() {
    let mut manager = LanguageManager::new();
    let err = manager.add_translation("en", "", "text").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid message key: message key must not be empty");
}

// =========================================================================
// clear
// =========================================================================

#[test]
fn clear_empties_registry_but_keeps_fallback() {
    let mut manager = LanguageManager::new();
    manager.clear();

    assert!(manager.supported_languages().is_empty());
    assert_eq!(manager.fallback_language().code(), "en");
    assert_eq!(
        manager.resolve("NotEmptyValidator", Some(&locale("fr"))),
        "'{PropertyName}' must not be empty."
    );
}

// =========================================================================
// Fallback
// =========================================================================

#[test]
fn set_fallback_language_need_not_be_registered() {
    let mut manager = LanguageManager::new();
    manager
        .set_fallback_language(translations!("xx"; "only_here" => "fallback text"))
        .unwrap();

    assert!(!manager.is_registered("xx"));
    assert_eq!(manager.fallback_language().code(), "xx");
    assert_eq!(
        manager.resolve("only_here", Some(&locale("de"))),
        "fallback text"
    );
}

#[test]
fn set_fallback_language_rejects_empty_code() {
    let mut manager = LanguageManager::new();
    let err = manager
        .set_fallback_language(TranslationSet::new(""))
        .unwrap_err();
    assert!(matches!(err, LanguageError::InvalidArgument { .. }));
    assert_eq!(manager.fallback_language().code(), "en");
}

#[test]
fn set_fallback_language_rejects_empty_set() {
    let mut manager = LanguageManager::new();
    let err = manager
        .set_fallback_language(TranslationSet::new("en"))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid fallback language: 'en' has no translations");

    manager.clear();
    assert_eq!(
        manager.resolve("NotNullValidator", Some(&locale("fr-FR"))),
        "'{PropertyName}' must not be empty."
    );
}

#[test]
fn set_fallback_locale_rejects_empty_registered_set() {
    let mut manager = LanguageManager::new();
    manager.add_language(TranslationSet::new("ja")).unwrap();
    let err = manager.set_fallback_locale(&locale("ja-JP")).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid fallback language: 'ja' has no translations");
    assert_eq!(manager.fallback_language().code(), "en");
}

#[test]
fn set_fallback_locale_uses_exact_code() {
    let mut manager = LanguageManager::new();
    manager.set_fallback_locale(&locale("pt-BR")).unwrap();
    assert_eq!(manager.fallback_language().code(), "pt-BR");
}

#[test]
fn set_fallback_locale_falls_back_to_neutral_parent() {
    let mut manager = LanguageManager::new();
    manager.set_fallback_locale(&locale("de-CH")).unwrap();
    assert_eq!(manager.fallback_language().code(), "de");
}

#[test]
fn set_fallback_locale_fails_for_unregistered_code() {
    let mut manager = LanguageManager::new();
    let err = manager.set_fallback_locale(&locale("ja-JP")).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"language 'ja' is not registered; add it with add_language before using it as the fallback");
    assert_eq!(manager.fallback_language().code(), "en");
}

#[test]
fn set_fallback_locale_fails_after_clear() {
    let mut manager = LanguageManager::new();
    manager.clear();
    let err = manager.set_fallback_locale(&locale("en")).unwrap_err();
    assert_eq!(
        err,
        LanguageError::UnregisteredLanguage {
            code: "en".to_string()
        }
    );
}

#[test]
fn fallback_survives_replacement_of_its_registered_code() {
    let mut manager = LanguageManager::new();
    manager.set_fallback_locale(&locale("fr")).unwrap();
    manager
        .add_language(translations!("fr"; "NotNullValidator" => "remplacé"))
        .unwrap();

    // The fallback still refers to the set it was pointed at.
    assert_eq!(
        manager.fallback_language().get("NotNullValidator"),
        Some("'{PropertyName}' ne doit pas avoir la valeur null.")
    );
}

#[test]
fn is_fallback_compares_identity_not_code() {
    let mut manager = LanguageManager::new();
    assert!(manager.is_fallback("en"));
    assert!(!manager.is_fallback("fr"));

    manager
        .add_language(translations!("en"; "NotNullValidator" => "custom"))
        .unwrap();
    assert!(!manager.is_fallback("en"));
    assert_eq!(manager.fallback_language().code(), "en");

    manager.set_fallback_locale(&locale("en")).unwrap();
    assert!(manager.is_fallback("en"));
    assert!(!manager.is_fallback("unregistered"));
}

// =========================================================================
// supported_languages
// =========================================================================

#[test]
fn supported_languages_is_a_snapshot() {
    let mut manager = LanguageManager::new();
    let before = manager.supported_languages();
    manager.clear();
    manager
        .add_language(translations!("eo"; "k" => "v"))
        .unwrap();

    assert_eq!(before.len(), builtin::codes().count());
    assert!(before.iter().all(|set| set.code() != "eo"));
    assert_eq!(manager.supported_languages().len(), 1);
}

#[test]
fn managers_share_builtin_sets() {
    let a = LanguageManager::new();
    let b = LanguageManager::new();
    let a_sets = a.supported_languages();
    let b_sets = b.supported_languages();
    assert!(a_sets.iter().zip(&b_sets).all(|(x, y)| Arc::ptr_eq(x, y)));
}

// =========================================================================
// Coverage helpers
// =========================================================================

#[test]
fn missing_keys_lists_fallback_keys_absent_from_language() {
    let mut manager = LanguageManager::new();
    manager
        .set_fallback_language(translations!("en"; "a" => "A", "b" => "B", "c" => "C"))
        .unwrap();
    manager
        .add_language(translations!("fr"; "b" => "B-fr", "z" => "extra"))
        .unwrap();

    assert_eq!(manager.missing_keys("fr"), vec!["a", "c"]);
    assert_eq!(manager.missing_keys("unregistered"), vec!["a", "b", "c"]);
}

#[test]
fn builtin_languages_have_no_missing_keys() {
    let manager = LanguageManager::new();
    for code in builtin::codes() {
        assert!(manager.missing_keys(code).is_empty(), "{code} is incomplete");
    }
}

#[test]
fn suggest_keys_finds_close_matches() {
    let manager = LanguageManager::new();
    assert_eq!(
        manager.suggest_keys("NotNulValidator"),
        vec!["NotNullValidator".to_string()]
    );
    assert!(manager.suggest_keys("NotNullValidator").is_empty());
    assert!(manager.suggest_keys("completely_unrelated").is_empty());
}
