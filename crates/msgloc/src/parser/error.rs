//! Parse error types for translation files.

use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The same key appears twice in one file.
    #[error("duplicate key '{key}' at line {line} (first defined at line {first_line})")]
    DuplicateKey {
        key: String,
        line: usize,
        first_line: usize,
    },
}

impl ParseError {
    /// The 1-based line and column the error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. } => (*line, *column),
            ParseError::DuplicateKey { line, .. } => (*line, 1),
        }
    }
}
