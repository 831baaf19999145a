//! Parsed representation of translation files.

/// A single `key = "text";` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Message key.
    pub key: String,
    /// Text with escapes already decoded.
    pub text: String,
    /// 1-based line the entry starts on.
    pub line: usize,
}
