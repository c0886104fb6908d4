//! Record scanner.
//!
//! Walks one line with a single [`Cursor`], calling the field lexer until
//! the line is exhausted.

use crate::lexer::{is_blank, match_field, skip_to_field, Cursor};
use crate::options::{Delimiter, ParseOptions};
use crate::{Record, Value};

/// Lexes every field of `line`.
///
/// An empty line yields an empty record. A line of only delimiters yields one
/// [`Value::Null`](crate::Value::Null) per delimiter. Unrecognized text becomes a single
/// [`Value::Undefined`](crate::Value::Undefined) covering everything up to the next delimiter.
/// A numeric literal too large for its type is also `Undefined`, but only the
/// literal itself is consumed.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{parse_record, Value};
///
/// let record = parse_record("1.5,abc,", ',');
/// assert_eq!(record, vec![Value::Float(1.5), Value::Undefined, Value::Null]);
///
/// assert_eq!(parse_record(",,", ','), vec![Value::Null, Value::Null]);
/// assert!(parse_record("", ',').is_empty());
/// ```
pub fn parse_record(line: &str, delimiter: impl Into<Delimiter>) -> Record {
    scan_record(line, delimiter.into().as_char(), false)
}

/// Lexes every field of `line` with the given options.
pub fn parse_record_with_options(line: &str, options: &ParseOptions) -> Record {
    scan_record(line, options.delimiter_char(), options.booleans)
}

pub(crate) fn scan_record(line: &str, delimiter: char, booleans: bool) -> Record {
    let mut cursor = Cursor::new(line);
    let mut fields = Vec::new();

    while !cursor.is_at_end() {
        if skip_to_field(&mut cursor, delimiter) {
            fields.push(Value::Null);
            continue;
        }

        let start = cursor.position();
        let value = match_field(&mut cursor, booleans);
        if value.is_undefined() {
            if cursor.position() == start {
                // No pattern accepted the character at the cursor.
                cursor.eat_while(|ch| ch != delimiter);
            }
            tracing::trace!(
                offset = start,
                len = cursor.position() - start,
                "unrecognized field"
            );
        }
        fields.push(value);
        cursor.eat_while(|ch| is_blank(ch) && ch != delimiter);
    }

    fields
}
