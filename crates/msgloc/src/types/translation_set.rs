use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::parser::{ParseError, parse_file};

/// A complete key -> text table for one locale.
///
/// Keys are case-sensitive and unique; inserting an existing key replaces its
/// text.
///
/// # Example
///
/// ```
/// use msgloc::TranslationSet;
///
/// let set = TranslationSet::builder()
///     .code("fr")
///     .build()
///     .with_translation("notnull_error", "ne doit pas être nul");
///
/// assert_eq!(set.get("notnull_error"), Some("ne doit pas être nul"));
/// assert_eq!(set.get("NotNull_Error"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct TranslationSet {
    /// Locale code this set is registered under (e.g., "en", "pt-BR").
    code: String,

    /// Message key -> translated text.
    #[builder(default)]
    #[serde(default)]
    translations: BTreeMap<String, String>,
}

impl TranslationSet {
    /// Create an empty set for a locale code.
    pub fn new(code: impl Into<String>) -> Self {
        TranslationSet::builder().code(code).build()
    }

    /// Create a set from key-text pairs.
    pub fn from_entries<K, V>(code: impl Into<String>, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        TranslationSet::builder()
            .code(code)
            .translations(
                entries
                    .into_iter()
                    .map(|(key, text)| (key.into(), text.into()))
                    .collect(),
            )
            .build()
    }

    /// Parse a translation file body into a set for `code`.
    ///
    /// See [`crate::parser`] for the file format.
    pub fn parse(code: impl Into<String>, content: &str) -> Result<Self, ParseError> {
        let entries = parse_file(content)?;
        Ok(Self::from_entries(
            code,
            entries.into_iter().map(|entry| (entry.key, entry.text)),
        ))
    }

    /// Add a translation, consuming and returning the set.
    #[must_use]
    pub fn with_translation(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Insert or replace a translation, returning the previous text.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.translations.insert(key.into(), text.into())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Look up the text for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    /// Message keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    /// Key-text pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.translations
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
