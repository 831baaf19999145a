//! Translation file parser.
//!
//! A translation file is a list of `key = "text";` entries with `//` line
//! comments:
//!
//! ```text
//! // French overrides
//! NotNullValidator = "'{PropertyName}' ne doit pas avoir la valeur null.";
//! Length_Simple = "'{PropertyName}' doit contenir entre {MinLength} et {MaxLength} caractères.";
//! ```
//!
//! Keys are ASCII alphanumerics plus `_`, `.` and `-`. Text is double-quoted
//! and supports the escapes `\"`, `\\`, `\n` and `\t`. Braces are kept as
//! literal text.

pub mod ast;
pub mod error;
mod file;

pub use ast::TranslationEntry;
pub use error::ParseError;
pub use file::parse_file;
