//! Tests for loading translation files into a manager.

use std::io::Write;

use msgloc::{LanguageError, LanguageManager, LoadError, Locale};
use tempfile::NamedTempFile;

fn locale(code: &str) -> Locale {
    Locale::parse(code).unwrap()
}

// =========================================================================
// String Loading
// =========================================================================

#[test]
fn load_translations_str_registers_language() {
    let mut manager = LanguageManager::new();
    let count = manager
        .load_translations_str(
            "eo",
            r#"
            NotNullValidator = "'{PropertyName}' ne estu malplena.";
            EmailValidator = "'{PropertyName}' ne estas valida retpoŝtadreso.";
        "#,
        )
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        manager.resolve("EmailValidator", Some(&locale("eo"))),
        "'{PropertyName}' ne estas valida retpoŝtadreso."
    );
    // Keys the file does not define come from the fallback.
    assert_eq!(
        manager.resolve("NotEmptyValidator", Some(&locale("eo"))),
        "'{PropertyName}' must not be empty."
    );
}

#[test]
fn load_translations_str_replaces_existing_language() {
    let mut manager = LanguageManager::new();
    manager
        .load_translations_str("de", r#"NotNullValidator = "ersetzt";"#)
        .unwrap();

    let de = locale("de");
    assert_eq!(manager.resolve("NotNullValidator", Some(&de)), "ersetzt");
    // The built-in German table is gone, so other keys use the fallback.
    assert_eq!(
        manager.resolve("NotEmptyValidator", Some(&de)),
        "'{PropertyName}' must not be empty."
    );
}

#[test]
fn load_translations_str_reports_parse_error_with_pseudo_path() {
    let mut manager = LanguageManager::new();
    let err = manager
        .load_translations_str("fr", "a = \"x\";\nbroken")
        .unwrap_err();

    match err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path.to_str(), Some("<fr>"));
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    // The previous French set is untouched.
    assert_eq!(
        manager.resolve("NotNullValidator", Some(&locale("fr"))),
        "'{PropertyName}' ne doit pas avoir la valeur null."
    );
}

#[test]
fn load_translations_str_reports_duplicate_keys() {
    let mut manager = LanguageManager::new();
    let err = manager
        .load_translations_str("fr", "a = \"1\";\na = \"2\";")
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"<fr>:2:1: duplicate key 'a' at line 2 (first defined at line 1)");
}

#[test]
fn load_translations_str_rejects_empty_code() {
    let mut manager = LanguageManager::new();
    let err = manager.load_translations_str("", "a = \"1\";").unwrap_err();
    assert!(matches!(
        err,
        LoadError::Language(LanguageError::InvalidArgument { .. })
    ));
}

// =========================================================================
// File Loading
// =========================================================================

#[test]
fn load_translations_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "// Swedish").unwrap();
    writeln!(file, r#"NotNullValidator = "'{{PropertyName}}' får inte vara tomt.";"#).unwrap();

    let mut manager = LanguageManager::new();
    let count = manager.load_translations("sv", file.path()).unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        manager.resolve("NotNullValidator", Some(&locale("sv-SE"))),
        "'{PropertyName}' får inte vara tomt."
    );
}

#[test]
fn load_translations_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.msg");

    let mut manager = LanguageManager::new();
    let err = manager.load_translations("sv", &path).unwrap_err();
    match err {
        LoadError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(!manager.is_registered("sv"));
}

#[test]
fn load_translations_parse_error_names_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "k = \"unterminated").unwrap();

    let mut manager = LanguageManager::new();
    let err = manager.load_translations("sv", file.path()).unwrap_err();
    match err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path, file.path());
            assert_eq!(line, 1);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
