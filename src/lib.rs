//! # serde_dsv
//!
//! A schema-less tokenizer for delimiter-separated text (CSV, TSV and friends)
//! that infers a type for every field, with Serde integration.
//!
//! ## What does it do?
//!
//! Input is text made of newline-separated records and delimiter-separated
//! fields. Each field is classified, without a schema, as one of:
//!
//! - **String**: text in single or double quotes (quotes stripped, escapes kept verbatim)
//! - **Float**: a decimal number with a point, optionally with an exponent
//! - **Integer**: a signed decimal or `0x` hexadecimal literal
//! - **Null**: an empty field
//! - **Undefined**: anything else
//!
//! Tokenizing never fails. A field that matches nothing becomes
//! [`Value::Undefined`] and the rest of the record is still read.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_dsv::{parse_table, Value};
//!
//! let table = parse_table("1,2.5,\"a,b\"\n0x1F,,oops");
//!
//! assert_eq!(
//!     table[0],
//!     vec![Value::Integer(1), Value::Float(2.5), Value::String("a,b".to_string())]
//! );
//! assert_eq!(table[1], vec![Value::Integer(31), Value::Null, Value::Undefined]);
//! ```
//!
//! ### Reading Records into Rust Types
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_dsv::{from_str, from_str_with_headers};
//!
//! let pairs: Vec<(i64, Option<f64>)> = from_str("1,2.5\n2,").unwrap();
//! assert_eq!(pairs, vec![(1, Some(2.5)), (2, None)]);
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Reading { sensor: String, value: f64 }
//!
//! let readings: Vec<Reading> =
//!     from_str_with_headers("'sensor','value'\n'a',0.5\n'b',1.25").unwrap();
//! assert_eq!(readings[1], Reading { sensor: "b".to_string(), value: 1.25 });
//! ```
//!
//! ## Lower-level Entry Points
//!
//! - [`parse_table`]: whole input, one [`Record`] per line
//! - [`parse_record`]: one line
//! - [`parse_field`]: one field at a [`Cursor`], for custom scanning loops
//!
//! ## Performance Characteristics
//!
//! - **Single pass**: every character is visited once through a forward cursor
//! - **No regex engine**: each pattern is a hand-written anchored scanner
//! - **Memory**: the whole input is held in memory; there is no streaming mode
//!
//! ## Logging
//!
//! Parse events are emitted through [`tracing`] (`debug` per table, `trace`
//! per record and per unrecognized field). No subscriber is installed.

pub mod de;
pub mod error;
pub mod lexer;
pub mod map;
pub mod options;
pub mod scanner;
pub mod table;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use lexer::{parse_field, parse_field_with_options, Cursor};
pub use map::{keyed_records, RecordMap};
pub use options::{Delimiter, ParseOptions};
pub use scanner::{parse_record, parse_record_with_options};
pub use table::{parse_table, parse_table_with_delimiter, parse_table_with_options};
pub use value::{Kind, Record, Table, Value};

use serde::de::DeserializeOwned;
use std::io;

/// Deserialize an instance of type `T` from comma-delimited text.
///
/// The input is read as a sequence of records, each record a sequence of
/// fields, so `T` is typically a `Vec` of tuples, `Vec`s or structs.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::from_str;
///
/// let rows: Vec<Vec<i64>> = from_str("1,2\n3").unwrap();
/// assert_eq!(rows, vec![vec![1, 2], vec![3]]);
/// ```
///
/// Empty fields and unrecognized fields both read as `None` into an
/// `Option<T>`. Reading into [`Value`] keeps them apart as [`Value::Null`]
/// and [`Value::Undefined`].
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] or [`Error::InvalidData`] if a record or
/// field cannot be deserialized into the requested type. Both name the record
/// (1-based) and the field (1-based, or 0 when the whole record was rejected).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &ParseOptions::default())
}

/// Deserialize an instance of type `T` from text, with custom parse options.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{from_str_with_options, Delimiter, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_delimiter(Delimiter::Tab)
///     .with_booleans(true);
/// let rows: Vec<(bool, i64)> = from_str_with_options("true\t1", &options).unwrap();
/// assert_eq!(rows, vec![(true, 1)]);
/// ```
///
/// # Errors
///
/// Returns an error if a field cannot be deserialized into the requested type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &ParseOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let table = parse_table_with_options(s, options);
    T::deserialize(Deserializer::new(table))
}

/// Deserialize records keyed by a header line.
///
/// The first line names the columns; every following record is read as a map
/// from column name to field, so structs deserialize by field name.
///
/// # Errors
///
/// Returns [`Error::MissingHeader`] on empty input, or an error if a field
/// cannot be deserialized into the requested type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_headers<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_headers_and_options(s, &ParseOptions::default())
}

/// Deserialize records keyed by a header line, with custom parse options.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_dsv::{from_str_with_headers_and_options, Delimiter, ParseOptions};
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Row { id: i64, ok: bool }
///
/// let options = ParseOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_booleans(true);
/// let rows: Vec<Row> =
///     from_str_with_headers_and_options("'ok'|'id'\ntrue|7", &options).unwrap();
/// assert_eq!(rows, vec![Row { id: 7, ok: true }]);
/// ```
///
/// # Errors
///
/// Returns [`Error::MissingHeader`] on empty input, or an error if a field
/// cannot be deserialized into the requested type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_headers_and_options<T>(s: &str, options: &ParseOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let table = parse_table_with_options(s, options);
    T::deserialize(Deserializer::with_headers(table)?)
}

/// Deserialize an instance of type `T` from an I/O stream of comma-delimited text.
///
/// The whole stream is read before parsing starts.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::from_reader;
/// use std::io::Cursor;
///
/// let rows: Vec<(i64, i64)> = from_reader(Cursor::new(b"1,2\n3,4")).unwrap();
/// assert_eq!(rows, vec![(1, 2), (3, 4)]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the stream is not valid UTF-8, or the
/// data cannot be deserialized into `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&bytes)
}

/// Deserialize an instance of type `T` from bytes of comma-delimited text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or cannot be
/// deserialized into `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::Utf8(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Point {
        x: i64,
        y: i64,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        score: Option<f64>,
    }

    #[test]
    fn test_positional_struct() {
        let points: Vec<Point> = from_str("1,2\n3,4").unwrap();
        assert_eq!(points, vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }]);
    }

    #[test]
    fn test_headed_struct() {
        let users: Vec<User> =
            from_str_with_headers("'id','name','score'\n1,'Alice',9.5\n2,'Bob',").unwrap();
        assert_eq!(
            users,
            vec![
                User {
                    id: 1,
                    name: "Alice".to_string(),
                    score: Some(9.5),
                },
                User {
                    id: 2,
                    name: "Bob".to_string(),
                    score: None,
                },
            ]
        );
    }

    #[test]
    fn test_headers_on_empty_input() {
        let result: Result<Vec<User>> = from_str_with_headers("");
        assert_eq!(result.unwrap_err(), Error::MissingHeader);
    }

    #[test]
    fn test_headed_struct_with_tabs() {
        let options = ParseOptions::new().with_delimiter(Delimiter::Tab);
        let users: Vec<User> =
            from_str_with_headers_and_options("'name'\t'id'\t'score'\n'Cy'\t3\t", &options)
                .unwrap();
        assert_eq!(
            users,
            vec![User {
                id: 3,
                name: "Cy".to_string(),
                score: None,
            }]
        );
    }

    #[test]
    fn test_negative_into_unsigned_is_located() {
        let result: Result<Vec<(u32, f64)>> = from_str("1,2.0\n-5,3.0");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("record 2, field 1"), "{err}");
    }

    #[test]
    fn test_missing_column_is_located() {
        let result: Result<Vec<User>> = from_str_with_headers("'id','name','score'\n1,'Al',2.0\n2");
        match result.unwrap_err() {
            Error::InvalidData { record, message, .. } => {
                assert_eq!(record, 3);
                assert_eq!(message, "missing field `name`");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_values_keep_undefined() {
        let rows: Vec<Vec<Value>> = from_str("x,").unwrap();
        assert_eq!(rows, vec![vec![Value::Undefined, Value::Null]]);
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let result: Result<Vec<Vec<i64>>> = from_slice(&[0x31, 0xFF]);
        assert!(matches!(result, Err(Error::Utf8(_))));
    }

    #[test]
    fn test_from_reader() {
        let rows: Vec<Vec<f64>> = from_reader(std::io::Cursor::new("1.5\n2.5")).unwrap();
        assert_eq!(rows, vec![vec![1.5], vec![2.5]]);
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<Vec<i64>> = from_str("").unwrap();
        assert!(rows.is_empty());
    }
}
