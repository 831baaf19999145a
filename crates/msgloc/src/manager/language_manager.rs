//! The translation registry.
//!
//! [`LanguageManager`] maps locale codes to translation sets and resolves
//! message keys through the locale fallback chain.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bon::Builder;
use strsim::levenshtein;
use tracing::{debug, trace};

use crate::builtin;
use crate::manager::error::{LanguageError, LoadError};
use crate::manager::legacy::{LegacyResourceProvider, remap_legacy_key};
use crate::parser::ParseError;
use crate::types::{Locale, TranslationSet};

/// Registry of translation sets with locale fallback.
///
/// A new manager is seeded with the built-in language bundle and uses English
/// as its fallback set. Lookups walk
/// `specific locale -> neutral parent -> fallback` and return an empty string
/// when nothing matches.
///
/// Mutation takes `&mut self`. Configure the manager at startup and share it
/// immutably afterwards, or wrap it in a
/// [`SharedLanguageManager`](crate::SharedLanguageManager) when it must be
/// reconfigured while other threads resolve.
///
/// # Example
///
/// ```
/// use msgloc::{LanguageManager, Locale, translations};
///
/// let mut manager = LanguageManager::new();
/// manager
///     .set_fallback_language(translations!("en"; "notnull_error" => "must not be null"))
///     .unwrap();
/// manager
///     .add_language(translations!("fr"; "notnull_error" => "ne doit pas être nul"))
///     .unwrap();
///
/// let french = Locale::parse("fr-FR").unwrap();
/// let german = Locale::parse("de-DE").unwrap();
/// assert_eq!(manager.resolve("notnull_error", Some(&french)), "ne doit pas être nul");
/// assert_eq!(manager.resolve("unknown_key", Some(&french)), "");
///
/// manager.clear();
/// assert_eq!(manager.resolve("notnull_error", Some(&german)), "must not be null");
/// ```
#[derive(Builder)]
pub struct LanguageManager {
    /// When false, every lookup uses the fallback set.
    #[builder(default = true)]
    enabled: bool,

    /// Ambient locale used when `resolve` is called without one.
    #[builder(default)]
    culture: Locale,

    /// Deprecated override consulted before locale resolution.
    legacy_provider: Option<Arc<dyn LegacyResourceProvider>>,

    /// Registered sets keyed by locale code.
    #[builder(skip = builtin::registered())]
    languages: BTreeMap<String, Arc<TranslationSet>>,

    /// Held directly; it need not be present in `languages`.
    #[builder(skip = builtin::english())]
    fallback: Arc<TranslationSet>,
}

impl Default for LanguageManager {
    fn default() -> Self {
        LanguageManager::builder().build()
    }
}

impl fmt::Debug for LanguageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageManager")
            .field("enabled", &self.enabled)
            .field("culture", &self.culture.code())
            .field("legacy_provider", &self.legacy_provider.is_some())
            .field("languages", &self.languages.keys().collect::<Vec<_>>())
            .field("fallback", &self.fallback.code())
            .finish()
    }
}

impl LanguageManager {
    /// Create a manager seeded with the built-in languages.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle locale-specific lookup. Disabled managers resolve every key
    /// against the fallback set.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The ambient locale used when no locale is passed to `resolve`.
    pub fn culture(&self) -> &Locale {
        &self.culture
    }

    pub fn set_culture(&mut self, culture: Locale) {
        self.culture = culture;
    }

    /// Install or remove the legacy resource provider.
    pub fn set_legacy_provider(&mut self, provider: Option<Arc<dyn LegacyResourceProvider>>) {
        self.legacy_provider = provider;
    }

    pub fn has_legacy_provider(&self) -> bool {
        self.legacy_provider.is_some()
    }

    // =========================================================================
    // Registry Mutation
    // =========================================================================

    /// Register a translation set under its code.
    ///
    /// An existing set with the same code is replaced wholesale.
    pub fn add_language(&mut self, language: TranslationSet) -> Result<(), LanguageError> {
        require_code(language.code())?;
        debug!(code = language.code(), keys = language.len(), "registering language");
        self.languages
            .insert(language.code().to_string(), Arc::new(language));
        Ok(())
    }

    /// Add or replace a single translation in the set registered for `code`,
    /// creating the set if needed.
    ///
    /// Built-in sets are shared, so the first edit copies the set. If the edited
    /// set was the fallback, the fallback follows the edit.
    pub fn add_translation(
        &mut self,
        code: &str,
        key: &str,
        text: impl Into<String>,
    ) -> Result<(), LanguageError> {
        require_code(code)?;
        if key.trim().is_empty() {
            return Err(LanguageError::InvalidArgument {
                argument: "message key",
                reason: "message key must not be empty".to_string(),
            });
        }

        let entry = self
            .languages
            .entry(code.to_string())
            .or_insert_with(|| Arc::new(TranslationSet::new(code)));
        let was_fallback = Arc::ptr_eq(entry, &self.fallback);
        Arc::make_mut(entry).insert(key, text);
        if was_fallback {
            self.fallback = Arc::clone(entry);
        }
        Ok(())
    }

    /// Remove every registered language. The fallback set is kept.
    pub fn clear(&mut self) {
        debug!(count = self.languages.len(), "clearing registered languages");
        self.languages.clear();
    }

    /// Replace the fallback set. The set does not have to be registered, but
    /// it must hold at least one translation.
    pub fn set_fallback_language(&mut self, language: TranslationSet) -> Result<(), LanguageError> {
        require_code(language.code())?;
        require_translations(&language)?;
        debug!(code = language.code(), "setting fallback language");
        self.fallback = Arc::new(language);
        Ok(())
    }

    /// Point the fallback at a registered set.
    ///
    /// A specific locale whose exact code is not registered uses its neutral
    /// parent instead. Fails if neither is registered, or if the set found
    /// has no translations.
    pub fn set_fallback_locale(&mut self, locale: &Locale) -> Result<(), LanguageError> {
        let code = self.lookup_code(locale);
        let language = self
            .languages
            .get(code)
            .ok_or_else(|| LanguageError::UnregisteredLanguage {
                code: code.to_string(),
            })?;
        require_translations(language)?;
        debug!(requested = locale.code(), code, "setting fallback locale");
        self.fallback = Arc::clone(language);
        Ok(())
    }

    // =========================================================================
    // Registry Access
    // =========================================================================

    /// Snapshot of the registered sets, ordered by code.
    ///
    /// Later mutation of the manager does not affect the returned vector.
    pub fn supported_languages(&self) -> Vec<Arc<TranslationSet>> {
        self.languages.values().cloned().collect()
    }

    /// The registered set for an exact code.
    pub fn language(&self, code: &str) -> Option<&TranslationSet> {
        self.languages.get(code).map(AsRef::as_ref)
    }

    pub fn is_registered(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// The set used when no better match exists.
    pub fn fallback_language(&self) -> &TranslationSet {
        &self.fallback
    }

    /// True when the set registered for `code` is the fallback set itself,
    /// not merely a set with the same code.
    pub fn is_fallback(&self, code: &str) -> bool {
        self.languages
            .get(code)
            .is_some_and(|language| Arc::ptr_eq(language, &self.fallback))
    }

    /// Keys present in the fallback set but missing from the set registered
    /// for `code`. Every fallback key is missing when `code` is unregistered.
    pub fn missing_keys(&self, code: &str) -> Vec<&str> {
        let language = self.languages.get(code);
        self.fallback
            .keys()
            .filter(|key| !language.is_some_and(|l| l.contains_key(key)))
            .collect()
    }

    /// Up to three fallback keys within a small edit distance of `key`,
    /// closest first.
    pub fn suggest_keys(&self, key: &str) -> Vec<String> {
        let max_distance = if key.len() <= 3 { 1 } else { 2 };
        let mut suggestions: Vec<(usize, &str)> = self
            .fallback
            .keys()
            .filter_map(|candidate| {
                let dist = levenshtein(key, candidate);
                (dist > 0 && dist <= max_distance).then_some((dist, candidate))
            })
            .collect();
        suggestions.sort_by_key(|(dist, _)| *dist);
        suggestions
            .into_iter()
            .take(3)
            .map(|(_, s)| s.to_string())
            .collect()
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve a message key for a locale.
    ///
    /// Uses the ambient [`culture`](Self::culture) when `locale` is `None`.
    /// Returns an empty string when no set in the chain has the key.
    pub fn resolve(&self, key: &str, locale: Option<&Locale>) -> String {
        if let Some(text) = self.legacy_lookup(key) {
            return text;
        }

        let locale = locale.unwrap_or(&self.culture);
        let code = self.lookup_code(locale);
        let language = match self.languages.get(code) {
            Some(language) if self.enabled => language,
            _ => &self.fallback,
        };
        trace!(key, requested = locale.code(), using = language.code(), "resolving");

        if let Some(text) = language.get(key) {
            return text.to_string();
        }
        if !Arc::ptr_eq(language, &self.fallback) {
            if let Some(text) = self.fallback.get(key) {
                trace!(key, fallback = self.fallback.code(), "resolved from fallback");
                return text.to_string();
            }
        }
        String::new()
    }

    /// The code to look up for a locale: its own code when registered or
    /// neutral, otherwise its neutral parent.
    fn lookup_code<'a>(&self, locale: &'a Locale) -> &'a str {
        if !locale.is_neutral() && !self.languages.contains_key(locale.code()) {
            locale.parent_code()
        } else {
            locale.code()
        }
    }

    /// Consult the legacy provider, discarding any failure.
    fn legacy_lookup(&self, key: &str) -> Option<String> {
        let provider = self.legacy_provider.as_ref()?;
        let name = remap_legacy_key(key);
        match provider.resource(name) {
            Ok(text) => text,
            Err(error) => {
                debug!(key, name, %error, "legacy resource provider failed; falling through");
                None
            }
        }
    }

    // =========================================================================
    // Translation Loading
    // =========================================================================

    /// Load a translation file and register it under `code`.
    ///
    /// Loading a code that is already registered replaces its set. Returns the
    /// number of entries loaded.
    pub fn load_translations(
        &mut self,
        code: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.load_translations_internal(code, &content, path.to_path_buf())
    }

    /// Parse translations from a string and register them under `code`.
    pub fn load_translations_str(&mut self, code: &str, content: &str) -> Result<usize, LoadError> {
        self.load_translations_internal(code, content, PathBuf::from(format!("<{code}>")))
    }

    fn load_translations_internal(
        &mut self,
        code: &str,
        content: &str,
        path: PathBuf,
    ) -> Result<usize, LoadError> {
        require_code(code)?;
        let language = TranslationSet::parse(code, content).map_err(|e| {
            let (line, column) = e.position();
            let message = match e {
                ParseError::Syntax { message, .. } => message,
                duplicate @ ParseError::DuplicateKey { .. } => duplicate.to_string(),
            };
            LoadError::Parse {
                path,
                line,
                column,
                message,
            }
        })?;
        let count = language.len();
        self.add_language(language)?;
        Ok(count)
    }
}

/// Reject empty or blank locale codes.
fn require_code(code: &str) -> Result<(), LanguageError> {
    if code.trim().is_empty() {
        return Err(LanguageError::InvalidArgument {
            argument: "language code",
            reason: "language code must not be empty".to_string(),
        });
    }
    Ok(())
}

/// The fallback set must never be empty.
fn require_translations(language: &TranslationSet) -> Result<(), LanguageError> {
    if language.is_empty() {
        return Err(LanguageError::InvalidArgument {
            argument: "fallback language",
            reason: format!("'{}' has no translations", language.code()),
        });
    }
    Ok(())
}
