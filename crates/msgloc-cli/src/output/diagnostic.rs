//! Miette diagnostic wrapper for translation file parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use msgloc::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic for translation file errors.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(msgloc::parse))]
pub struct MsglocDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,

    label: String,

    #[help]
    help: Option<String>,
}

impl MsglocDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let (message, label, help) = match err {
            ParseError::Syntax { message, .. } => {
                (format!("syntax error: {message}"), "error here".to_string(), None)
            }
            ParseError::DuplicateKey {
                key, first_line, ..
            } => (
                format!("duplicate key '{key}'"),
                "defined again here".to_string(),
                Some(format!("'{key}' is first defined at line {first_line}")),
            ),
        };

        Self::new(path, content, (line, column), message, label, help)
    }

    /// Create a diagnostic for a located error reported without a
    /// [`ParseError`], such as a registry load failure.
    pub fn from_location(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: String,
    ) -> Self {
        Self::new(path, content, (line, column), message, "error here".to_string(), None)
    }

    fn new(
        path: &Path,
        content: &str,
        (line, column): (usize, usize),
        message: String,
        label: String,
        help: Option<String>,
    ) -> Self {
        let offset = byte_offset(content, line, column);

        MsglocDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            label,
            help,
        }
    }
}

/// Convert a 1-based line and character column into a byte offset, clamped
/// to the content length.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let within_line = content[line_start.min(content.len())..]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(content.len() - line_start.min(content.len()), |(i, _)| i);
    (line_start + within_line).min(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_on_first_line() {
        assert_eq!(byte_offset("abc = \"x\";", 1, 5), 4);
    }

    #[test]
    fn offset_on_later_line() {
        assert_eq!(byte_offset("a = \"x\";\nb = oops;\n", 2, 5), 13);
    }

    #[test]
    fn offset_counts_characters_not_bytes() {
        assert_eq!(byte_offset("é = x", 1, 3), 3);
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(byte_offset("a", 5, 10), 1);
    }
}
