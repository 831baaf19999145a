//! Error types for registry configuration and translation loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by registry mutation and locale parsing.
///
/// Resolution itself never fails; a missing translation is an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// A required argument was empty or otherwise malformed.
    #[error("invalid {argument}: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// A fallback locale was requested for a code with no registered set.
    #[error(
        "language '{code}' is not registered; add it with add_language before using it as the fallback"
    )]
    UnregisteredLanguage { code: String },

    /// A locale identifier could not be parsed.
    #[error("invalid locale '{input}': {reason}")]
    InvalidLocale { input: String, reason: String },
}

/// Errors that occur while loading translation files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a translation file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The parsed set was rejected by the registry.
    #[error(transparent)]
    Language(#[from] LanguageError),
}
