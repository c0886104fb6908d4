//! Header-keyed records.
//!
//! This module provides [`RecordMap`], a wrapper around [`IndexMap`] that
//! pairs each field of a record with the column name from a header record.
//! Insertion order is the column order of the input.
//!
//! ## Examples
//!
//! ```rust
//! use serde_dsv::{keyed_records, parse_table};
//!
//! let table = parse_table("'id','score'\n1,2.5\n2,");
//! let rows = keyed_records(table).unwrap();
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].get("score").and_then(|v| v.as_f64()), Some(2.5));
//! assert!(rows[1].get("score").map_or(false, |v| v.is_null()));
//! ```

use crate::{Error, Record, Result, Table, Value};
use indexmap::IndexMap;

/// An ordered map of column names to field values.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMap(IndexMap<String, Value>);

impl RecordMap {
    /// Pairs `record` with `headers` positionally.
    ///
    /// Fields beyond the header count are dropped; headers beyond the field
    /// count are left out of the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dsv::{RecordMap, Value};
    ///
    /// let headers = vec!["a".to_string(), "b".to_string()];
    /// let map = RecordMap::from_record(&headers, vec![Value::from(1), Value::from(2), Value::from(3)]);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub fn from_record(headers: &[String], record: Record) -> Self {
        headers.iter().cloned().zip(record).collect()
    }

    /// Returns a reference to the value in the named column.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the column names, in input order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }
}

impl IntoIterator for RecordMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for RecordMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        RecordMap(IndexMap::from_iter(iter))
    }
}

/// Column names taken from a header record.
///
/// Quoted fields name their column by body; any other field uses its
/// display text.
pub(crate) fn header_names(record: &Record) -> Vec<String> {
    record
        .iter()
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

/// Splits off the first record of `table` as a header and keys every
/// following record by it.
///
/// # Errors
///
/// Returns [`Error::MissingHeader`] if `table` has no records.
pub fn keyed_records(table: Table) -> Result<Vec<RecordMap>> {
    let mut records = table.into_iter();
    let headers = records
        .next()
        .map(|record| header_names(&record))
        .ok_or(Error::MissingHeader)?;

    Ok(records
        .map(|record| RecordMap::from_record(&headers, record))
        .collect())
}
