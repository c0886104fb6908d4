//! Error types for DSV reading and deserialization.
//!
//! Tokenizing never fails: fields that match no pattern become
//! [`Value::Undefined`](crate::Value::Undefined) and the parse carries on.
//! Errors only come from the surfaces around the lexer:
//!
//! - **I/O Errors**: Reading input from a stream failed
//! - **UTF-8 Errors**: Byte input is not valid UTF-8
//! - **Type Mismatches**: A field could not be deserialized into the requested type
//! - **Invalid Data**: Any other rejection by the target type (missing struct
//!   field, unknown enum variant, wrong length), located like a mismatch
//! - **Header Errors**: Header-keyed deserialization on input with no header record
//!
//! ## Examples
//!
//! ```rust
//! use serde_dsv::{from_str, Error};
//!
//! let result: Result<Vec<(i64, i64)>, Error> = from_str("1,\"two\"");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("record 1"));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur around DSV parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(String),

    /// A field could not be deserialized into the requested type.
    ///
    /// `record` and `field` are 1-based.
    #[error("Type mismatch at record {record}, field {field}: expected {expected}, found {found}")]
    TypeMismatch {
        record: usize,
        field: usize,
        expected: String,
        found: String,
    },

    /// The target type rejected a record or field for a reason other than its type.
    ///
    /// `record` is 1-based. `field` is 1-based, or 0 when the whole record was rejected.
    #[error("Invalid data at record {record}, field {field}: {message}")]
    InvalidData {
        record: usize,
        field: usize,
        message: String,
    },

    /// Header-keyed deserialization found no header record
    #[error("Missing header record")]
    MissingHeader,

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error for the field at `record`/`field` (1-based).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dsv::Error;
    ///
    /// let err = Error::type_mismatch(5, 2, "integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(record: usize, field: usize, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            record,
            field,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Attaches a record/field location to an error raised without one.
    ///
    /// Errors that already carry a location are returned unchanged, so the
    /// innermost location wins.
    pub(crate) fn at(self, record: usize, field: usize) -> Self {
        match self {
            Error::Custom(message) => Error::InvalidData {
                record,
                field,
                message,
            },
            Error::TypeMismatch {
                record: 0,
                expected,
                found,
                ..
            } => Error::TypeMismatch {
                record,
                field,
                expected,
                found,
            },
            other => other,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    fn invalid_type(unexp: serde::de::Unexpected<'_>, exp: &dyn serde::de::Expected) -> Self {
        Error::type_mismatch(0, 0, &exp.to_string(), &unexp.to_string())
    }

    fn invalid_value(unexp: serde::de::Unexpected<'_>, exp: &dyn serde::de::Expected) -> Self {
        Error::type_mismatch(0, 0, &exp.to_string(), &unexp.to_string())
    }

    fn invalid_length(len: usize, exp: &dyn serde::de::Expected) -> Self {
        Error::Custom(format!("expected {exp}, found {len} fields"))
    }

    fn unknown_variant(variant: &str, expected: &'static [&'static str]) -> Self {
        Error::Custom(format!(
            "unknown variant `{variant}`, expected one of: {}",
            expected.join(", ")
        ))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::Error as _;

    #[test]
    fn test_at_locates_custom_errors() {
        let err = <Error as serde::de::Error>::missing_field("price").at(3, 0);
        assert_eq!(
            err,
            Error::InvalidData {
                record: 3,
                field: 0,
                message: "missing field `price`".to_string(),
            }
        );
    }

    #[test]
    fn test_at_keeps_innermost_location() {
        let err = Error::type_mismatch(0, 0, "u32", "string").at(2, 4).at(2, 0);
        assert_eq!(err, Error::type_mismatch(2, 4, "u32", "string"));

        let err = Error::custom("bad").at(5, 1).at(5, 0);
        assert!(err.to_string().contains("record 5, field 1"), "{err}");
    }

    #[test]
    fn test_unknown_variant_lists_expected() {
        let err = Error::unknown_variant("hold", &["buy", "sell"]);
        assert_eq!(
            err.to_string(),
            "Error: unknown variant `hold`, expected one of: buy, sell"
        );
    }

    #[test]
    fn test_io_and_utf8_are_not_located() {
        assert_eq!(Error::io("closed").at(1, 1), Error::io("closed"));
        assert_eq!(Error::MissingHeader.at(1, 0), Error::MissingHeader);
    }
}
