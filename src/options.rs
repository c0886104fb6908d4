//! Configuration options for DSV parsing.
//!
//! This module provides types to customize how text is tokenized:
//!
//! - [`ParseOptions`]: Main configuration struct
//! - [`Delimiter`]: Choice of field delimiter (comma, tab, pipe, semicolon, or any other char)
//!
//! ## Examples
//!
//! ```rust
//! use serde_dsv::{parse_table_with_options, Delimiter, ParseOptions, Value};
//!
//! // Pipe-separated input
//! let options = ParseOptions::new().with_delimiter(Delimiter::Pipe);
//! let table = parse_table_with_options("1|2", &options);
//! assert_eq!(table[0], vec![Value::Integer(1), Value::Integer(2)]);
//!
//! // Recognize `true` / `false` literals
//! let options = ParseOptions::new().with_booleans(true);
//! let table = parse_table_with_options("true,false", &options);
//! assert_eq!(table[0], vec![Value::Bool(true), Value::Bool(false)]);
//! ```

/// Field delimiter for DSV input.
///
/// - **Comma**: Default, classic CSV
/// - **Tab**: TSV
/// - **Pipe**: Markdown-style tables
/// - **Semicolon**: Spreadsheet exports in locales that use `,` as decimal separator
/// - **Other**: Any other single character
///
/// # Examples
///
/// ```rust
/// use serde_dsv::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::from(';'), Delimiter::Semicolon);
/// assert_eq!(Delimiter::from(':'), Delimiter::Other(':'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
    Other(char),
}

impl Delimiter {
    /// Returns the character this delimiter matches.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
            Delimiter::Other(c) => *c,
        }
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        match c {
            ',' => Delimiter::Comma,
            '\t' => Delimiter::Tab,
            '|' => Delimiter::Pipe,
            ';' => Delimiter::Semicolon,
            other => Delimiter::Other(other),
        }
    }
}

/// Configuration options for DSV parsing.
///
/// # Examples
///
/// ```rust
/// use serde_dsv::{ParseOptions, Delimiter};
///
/// // Default: comma delimiter, no boolean literals
/// let options = ParseOptions::new();
/// assert_eq!(options.delimiter, Delimiter::Comma);
/// assert!(!options.booleans);
///
/// // Custom configuration
/// let options = ParseOptions::new()
///     .with_delimiter(Delimiter::Tab)
///     .with_booleans(true);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOptions {
    pub delimiter: Delimiter,
    /// Recognize `true` and `false` as [`Value::Bool`](crate::Value::Bool).
    pub booleans: bool,
}

impl ParseOptions {
    /// Creates default options (comma delimiter, booleans off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    ///
    /// Accepts a [`Delimiter`] or a bare `char`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dsv::{ParseOptions, Delimiter};
    ///
    /// let options = ParseOptions::new().with_delimiter(';');
    /// assert_eq!(options.delimiter, Delimiter::Semicolon);
    /// ```
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Enables or disables boolean literal recognition.
    ///
    /// When enabled, `true` and `false` (case-sensitive, not followed by an
    /// identifier character) lex as booleans. They are tried after quoted
    /// strings and before numbers.
    #[must_use]
    pub fn with_booleans(mut self, enabled: bool) -> Self {
        self.booleans = enabled;
        self
    }

    pub(crate) fn delimiter_char(&self) -> char {
        self.delimiter.as_char()
    }
}
