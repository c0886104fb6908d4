//! Field lexer.
//!
//! Classifies the text of one field into a [`Value`], starting at a
//! [`Cursor`] and advancing it past everything consumed.
//!
//! ## Overview
//!
//! Lexing a field happens in two steps:
//!
//! 1. Leading whitespace and delimiters are skipped. Landing on a delimiter
//!    right after a skipped character, or running off the end of the text,
//!    means the field is empty and lexes as [`Value::Null`].
//! 2. Anchored patterns are tried in a fixed order, first match wins:
//!    quoted string, boolean (opt-in), float, integer. Float comes before
//!    integer because integer text is a prefix of most float literals.
//!
//! Text matching no pattern lexes as [`Value::Undefined`] and the cursor is
//! left where the pattern attempts started. Callers looping over a line must
//! force progress themselves; [`parse_record`](crate::parse_record) does.
//!
//! ## Examples
//!
//! ```rust
//! use serde_dsv::{parse_field, Cursor, Value};
//!
//! let mut cursor = Cursor::new("0x1F, 'x'");
//! assert_eq!(parse_field(&mut cursor, ','), Value::Integer(31));
//! assert_eq!(cursor.remaining(), ", 'x'");
//! assert_eq!(parse_field(&mut cursor, ','), Value::String("x".to_string()));
//! assert!(cursor.is_at_end());
//! ```

use crate::options::{Delimiter, ParseOptions};
use crate::Value;

/// A forward-only position in a line of text.
///
/// The position is a byte offset and always sits on a `char` boundary.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Cursor { text, position: 0 }
    }

    /// Byte offset of the cursor from the start of the text.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The text not yet consumed.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.position..]
    }

    #[inline]
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    /// The character at the cursor, or `None` at end of text.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes and returns the character at the cursor.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Consumes characters while `predicate` holds and text remains.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.position += ch.len_utf8();
        }
    }

    /// Consumes `len` bytes of a pattern match.
    fn advance(&mut self, len: usize) {
        debug_assert!(self.text.is_char_boundary(self.position + len));
        self.position += len;
    }
}

/// Whitespace as the C locale classifies it.
#[inline]
pub(crate) fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Lexes one field at `cursor` using `delimiter`.
///
/// Boolean literals are not recognized; use [`parse_field_with_options`] to
/// enable them.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{parse_field, Cursor, Value};
///
/// // Empty field between two delimiters
/// let mut cursor = Cursor::new(",,");
/// assert_eq!(parse_field(&mut cursor, ','), Value::Null);
/// assert_eq!(cursor.position(), 1);
///
/// // Unrecognized text leaves the cursor in place
/// let mut cursor = Cursor::new("abc");
/// assert_eq!(parse_field(&mut cursor, ','), Value::Undefined);
/// assert_eq!(cursor.position(), 0);
/// ```
pub fn parse_field(cursor: &mut Cursor<'_>, delimiter: impl Into<Delimiter>) -> Value {
    lex_field(cursor, delimiter.into().as_char(), false)
}

/// Lexes one field at `cursor` with the given options.
pub fn parse_field_with_options(cursor: &mut Cursor<'_>, options: &ParseOptions) -> Value {
    lex_field(cursor, options.delimiter_char(), options.booleans)
}

pub(crate) fn lex_field(cursor: &mut Cursor<'_>, delimiter: char, booleans: bool) -> Value {
    if skip_to_field(cursor, delimiter) {
        return Value::Null;
    }
    match_field(cursor, booleans)
}

/// Skips leading whitespace and delimiters. Returns `true` if the field is empty.
pub(crate) fn skip_to_field(cursor: &mut Cursor<'_>, delimiter: char) -> bool {
    while let Some(ch) = cursor.peek() {
        if !(is_blank(ch) || ch == delimiter) {
            break;
        }
        cursor.bump();
        if cursor.peek() == Some(delimiter) {
            return true;
        }
    }
    cursor.is_at_end()
}

/// Tries each pattern at the cursor. On `Undefined` the cursor has moved only
/// if a numeric literal was consumed but did not fit its type.
pub(crate) fn match_field(cursor: &mut Cursor<'_>, booleans: bool) -> Value {
    let text = cursor.remaining();

    if let Some(len) = scan_quoted(text) {
        cursor.advance(len);
        return Value::String(text[1..len - 1].to_string());
    }

    if booleans {
        if let Some((len, b)) = scan_boolean(text) {
            cursor.advance(len);
            return Value::Bool(b);
        }
    }

    if let Some(len) = scan_float(text) {
        cursor.advance(len);
        return text[..len]
            .parse::<f64>()
            .map(Value::Float)
            .unwrap_or(Value::Undefined);
    }

    if let Some(literal) = scan_integer(text) {
        cursor.advance(literal.len());
        return literal.value().map_or(Value::Undefined, Value::Integer);
    }

    Value::Undefined
}

/// Length of a quoted string at the start of `text`, quotes included.
///
/// The body is a run of `\`-escape pairs or non-quote characters, so a quote
/// may appear inside it only right after a backslash. Such a quote can also
/// close the string; the longest closing position wins. An unescaped quote
/// always closes.
fn scan_quoted(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let quote = match bytes.first() {
        Some(&q @ (b'"' | b'\'')) => q,
        _ => return None,
    };

    let mut end = None;
    for i in 1..bytes.len() {
        if bytes[i] != quote {
            continue;
        }
        end = Some(i + 1);
        if bytes[i - 1] != b'\\' {
            break;
        }
    }
    end
}

/// `true` or `false`, not running into an identifier.
fn scan_boolean(text: &str) -> Option<(usize, bool)> {
    let (len, value) = if text.starts_with("true") {
        (4, true)
    } else if text.starts_with("false") {
        (5, false)
    } else {
        return None;
    };

    match text[len..].chars().next() {
        Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' => None,
        _ => Some((len, value)),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

/// Length of `[+-]?(D+ '.' D* | '.' D+)([eE][+-]?D+)?` at the start of `text`.
fn scan_float(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = sign_len(bytes);

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;
    if bytes.get(pos) != Some(&b'.') {
        return None;
    }
    pos += 1;
    let frac_digits = count_digits(&bytes[pos..]);
    pos += frac_digits;
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let exp_start = pos + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = count_digits(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            pos = exp_start + exp_sign + exp_digits;
        }
    }

    Some(pos)
}

/// An integer literal matched at the start of a field.
#[derive(Debug, PartialEq)]
enum IntegerLiteral<'a> {
    /// Digits after `0x`.
    Hex(&'a str),
    /// Optional sign and digits.
    Decimal(&'a str),
}

impl IntegerLiteral<'_> {
    /// Length of the matched text, including any `0x` prefix.
    fn len(&self) -> usize {
        match self {
            IntegerLiteral::Hex(digits) => digits.len() + 2,
            IntegerLiteral::Decimal(text) => text.len(),
        }
    }

    /// Hex digits are read as `u64` and reinterpreted as two's complement.
    fn value(&self) -> Option<i64> {
        match self {
            IntegerLiteral::Hex(digits) => u64::from_str_radix(digits, 16).ok().map(|u| u as i64),
            IntegerLiteral::Decimal(text) => text.parse::<i64>().ok(),
        }
    }
}

/// `0x` followed by hex digits, else `[+-]?D+`, at the start of `text`.
fn scan_integer(text: &str) -> Option<IntegerLiteral<'_>> {
    let bytes = text.as_bytes();

    if bytes.starts_with(b"0x") {
        let hex_digits = bytes[2..].iter().take_while(|b| b.is_ascii_hexdigit()).count();
        if hex_digits > 0 {
            return Some(IntegerLiteral::Hex(&text[2..2 + hex_digits]));
        }
    }

    let sign = sign_len(bytes);
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    Some(IntegerLiteral::Decimal(&text[..sign + digits]))
}
