//! Table builder.
//!
//! Splits input on `\n` and scans each line into a [`Record`](crate::Record).

use crate::options::{Delimiter, ParseOptions};
use crate::scanner::scan_record;
use crate::Table;

/// Parses comma-delimited `text` into a [`Table`].
///
/// Every line becomes one record, blank lines included. A trailing newline
/// does not add a record, and empty input yields an empty table.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{parse_table, Value};
///
/// let table = parse_table("1,2\n\n'x'\n");
/// assert_eq!(table.len(), 3);
/// assert_eq!(table[0], vec![Value::Integer(1), Value::Integer(2)]);
/// assert!(table[1].is_empty());
/// assert_eq!(table[2], vec![Value::from("x")]);
///
/// assert!(parse_table("").is_empty());
/// ```
#[must_use]
pub fn parse_table(text: &str) -> Table {
    parse_table_with_options(text, &ParseOptions::default())
}

/// Parses `text` into a [`Table`] using `delimiter`.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{parse_table_with_delimiter, Delimiter, Value};
///
/// let table = parse_table_with_delimiter("1|2", Delimiter::Pipe);
/// assert_eq!(table[0], vec![Value::Integer(1), Value::Integer(2)]);
/// ```
#[must_use]
pub fn parse_table_with_delimiter(text: &str, delimiter: impl Into<Delimiter>) -> Table {
    parse_table_with_options(text, &ParseOptions::new().with_delimiter(delimiter))
}

/// Parses `text` into a [`Table`] with the given options.
#[must_use]
pub fn parse_table_with_options(text: &str, options: &ParseOptions) -> Table {
    let delimiter = options.delimiter_char();

    let table: Table = lines(text)
        .enumerate()
        .map(|(index, line)| {
            let record = scan_record(line, delimiter, options.booleans);
            tracing::trace!(record = index + 1, fields = record.len(), "scanned record");
            record
        })
        .collect();

    tracing::debug!(
        records = table.len(),
        delimiter = ?delimiter,
        "parsed table"
    );
    table
}

/// Lines of `text`, split on `\n`; a final terminator does not start a new line.
///
/// Carriage returns are left in place.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_empty_input() {
        assert!(parse_table("").is_empty());
    }

    #[test]
    fn test_single_line() {
        assert_eq!(
            parse_table("1,2,3"),
            vec![vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]]
        );
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let table = parse_table("1\n\n2");
        assert_eq!(
            table,
            vec![vec![Value::Integer(1)], vec![], vec![Value::Integer(2)]]
        );
    }

    #[test]
    fn test_trailing_newline() {
        assert_eq!(parse_table("1\n").len(), 1);
        assert_eq!(parse_table("1\n\n").len(), 2);
        assert_eq!(parse_table("\n").len(), 1);
    }

    #[test]
    fn test_crlf_lines() {
        let table = parse_table("1,2\r\n3,4\r\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table[1], vec![Value::Integer(3), Value::Integer(4)]);
    }

    #[test]
    fn test_quoted_newline_is_not_special() {
        // Lines are split before lexing, so a quote cannot span lines.
        let table = parse_table("\"a\nb\"");
        assert_eq!(table, vec![vec![Value::Undefined], vec![Value::Undefined]]);
    }

    #[test]
    fn test_custom_delimiter() {
        let table = parse_table_with_delimiter("1;2\n;", ';');
        assert_eq!(table[0], vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(table[1], vec![Value::Null]);
    }

    #[test]
    fn test_is_deterministic() {
        let text = "1,2.5,'x',\n,,\n0x10,abc";
        assert_eq!(parse_table(text), parse_table(text));
    }
}
