//! Tests for concurrent access through SharedLanguageManager.

use std::thread;

use msgloc::{LanguageManager, Locale, SharedLanguageManager, translations};

#[test]
fn clones_share_one_registry() {
    let shared = SharedLanguageManager::new(LanguageManager::new());
    let other = shared.clone();

    shared.clear();
    assert!(other.supported_languages().is_empty());
}

#[test]
fn readers_observe_reconfiguration() {
    let shared = SharedLanguageManager::from(LanguageManager::new());
    let fr = Locale::parse("fr").unwrap();

    shared.set_enabled(false);
    assert_eq!(
        shared.resolve("NotNullValidator", Some(&fr)),
        "'{PropertyName}' must not be empty."
    );

    shared.set_enabled(true);
    shared.set_fallback_locale(&fr).unwrap();
    assert_eq!(
        shared.resolve("NotNullValidator", Some(&Locale::parse("ja").unwrap())),
        "'{PropertyName}' ne doit pas avoir la valeur null."
    );
}

#[test]
fn concurrent_reads_during_writes_see_whole_sets() {
    let shared = SharedLanguageManager::default();
    shared
        .add_language(translations!("eo"; "a" => "A0", "b" => "B0"))
        .unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                let eo = Locale::parse("eo").unwrap();
                for _ in 0..500 {
                    shared.with_manager(|manager| {
                        let a = manager.resolve("a", Some(&eo));
                        let b = manager.resolve("b", Some(&eo));
                        assert_eq!(a[1..], b[1..], "saw a half-applied set");
                    });
                }
            })
        })
        .collect();

    for generation in 1..=100 {
        shared
            .add_language(translations!(
                "eo";
                "a" => format!("A{generation}"),
                "b" => format!("B{generation}"),
            ))
            .unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn with_manager_mut_batches_changes() {
    let shared = SharedLanguageManager::default();
    shared.with_manager_mut(|manager| {
        manager.clear();
        manager
            .set_fallback_language(translations!("en"; "k" => "fallback"))
            .unwrap();
    });

    assert!(shared.supported_languages().is_empty());
    assert_eq!(shared.resolve("k", None), "fallback");
}

#[test]
fn set_fallback_language_through_handle() {
    let shared = SharedLanguageManager::default();
    shared
        .set_fallback_language(translations!("xx"; "k" => "v"))
        .unwrap();
    assert_eq!(shared.resolve("k", Some(&Locale::parse("de").unwrap())), "v");
}
