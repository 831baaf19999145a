//! Translation file format parser.

use std::collections::HashMap;

use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::ast::TranslationEntry;
use super::error::ParseError;

/// Parse an entire translation file into entries, in file order.
pub fn parse_file(input: &str) -> Result<Vec<TranslationEntry>, ParseError> {
    let mut remaining = input;
    let mut entries = Vec::new();
    let mut first_lines: HashMap<String, usize> = HashMap::new();

    loop {
        skip_ws_and_comments(&mut remaining).map_err(|e| syntax_error(input, remaining, &e))?;
        if remaining.is_empty() {
            return Ok(entries);
        }

        let (line, _) = calculate_position(input, remaining);
        let (key, text) = entry
            .parse_next(&mut remaining)
            .map_err(|e| syntax_error(input, remaining, &e))?;

        if let Some(&first_line) = first_lines.get(&key) {
            return Err(ParseError::DuplicateKey {
                key,
                line,
                first_line,
            });
        }
        first_lines.insert(key.clone(), line);
        entries.push(TranslationEntry { key, text, line });
    }
}

/// Build a syntax error pointing at the unconsumed input.
fn syntax_error(original: &str, remaining: &str, error: &ErrMode<ContextError>) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    let detail = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.to_string().replace('\n', "; "),
        ErrMode::Incomplete(_) => "incomplete input".to_string(),
    };
    let message = match remaining.chars().next() {
        None if detail.is_empty() => "unexpected end of file".to_string(),
        None => format!("unexpected end of file: {detail}"),
        Some(c) if detail.is_empty() => format!("unexpected character '{c}'"),
        Some(c) => format!("unexpected character '{c}': {detail}"),
    };
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse an entry: key = "text" ;
fn entry(input: &mut &str) -> ModalResult<(String, String)> {
    let key = message_key(input)?;
    skip_ws_and_comments(input)?;
    '='.context(StrContext::Expected(StrContextValue::CharLiteral('=')))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    let text = quoted_text(input)?;
    skip_ws_and_comments(input)?;
    ';'.context(StrContext::Expected(StrContextValue::CharLiteral(';')))
        .parse_next(input)?;
    Ok((key, text))
}

/// Parse a message key (e.g., `NotNullValidator`, `Length_Simple`, `email.error`).
fn message_key(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
    })
    .map(str::to_string)
    .context(StrContext::Label("message key"))
    .parse_next(input)
}

/// Parse a double-quoted string, decoding escapes.
fn quoted_text(input: &mut &str) -> ModalResult<String> {
    delimited(
        '"',
        repeat(0.., alt((escape_sequence, none_of(['"', '\\'])))),
        '"',
    )
    .context(StrContext::Label("quoted text"))
    .parse_next(input)
}

/// Parse an escape sequence: \" \\ \n \t
fn escape_sequence(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        alt((
            '"'.value('"'),
            '\\'.value('\\'),
            'n'.value('\n'),
            't'.value('\t'),
        )),
    )
    .context(StrContext::Label("escape sequence"))
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_characters_not_bytes() {
        let original = "é = ";
        let remaining = &original[original.len() - 2..];
        assert_eq!(calculate_position(original, remaining), (1, 3));
    }

    #[test]
    fn position_after_newline() {
        let original = "a = \"x\";\nb";
        let remaining = &original[original.len() - 1..];
        assert_eq!(calculate_position(original, remaining), (2, 1));
    }
}
