//! Deserialization of parsed tables.
//!
//! This module provides [`Deserializer`], which presents a [`Table`] to serde
//! as a sequence of records. Each record is a sequence of fields, or, when a
//! header record is used, a map from column name to field.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_dsv::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Point { x: i64, y: f64 }
//!
//! let points: Vec<Point> = from_str("1, 2.5\n3, 4.0").unwrap();
//! assert_eq!(points[1], Point { x: 3, y: 4.0 });
//! ```
//!
//! ## Field Mapping
//!
//! - `Null` and `Undefined` fields read as `None` for `Option<T>` and as `()`
//! - `Null` reads as unit and `Undefined` as none for [`Value`] and other
//!   self-describing targets, so the two stay distinct
//! - `Integer`, `Float`, `Bool` and `String` read as their native types
//! - Quoted strings can name unit enum variants

use crate::map::{header_names, RecordMap};
use crate::{Error, Record, Result, Table, Value};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// A serde deserializer over a parsed [`Table`].
///
/// Created via [`Deserializer::new`] or [`Deserializer::with_headers`].
pub struct Deserializer {
    records: Table,
    headers: Option<Vec<String>>,
}

impl Deserializer {
    /// Deserializes every record positionally.
    #[must_use]
    pub fn new(table: Table) -> Self {
        Deserializer {
            records: table,
            headers: None,
        }
    }

    /// Takes the first record as column names and deserializes the rest as maps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingHeader`] if `table` is empty.
    pub fn with_headers(mut table: Table) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::MissingHeader);
        }
        let header = table.remove(0);
        Ok(Deserializer {
            records: table,
            headers: Some(header_names(&header)),
        })
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_seq(RecordsAccess {
            records: self.records.into_iter().enumerate(),
            headers: self.headers,
        })
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct RecordsAccess {
    records: std::iter::Enumerate<std::vec::IntoIter<Record>>,
    headers: Option<Vec<String>>,
}

impl<'de> de::SeqAccess<'de> for RecordsAccess {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        let Some((index, record)) = self.records.next() else {
            return Ok(None);
        };
        // Records after a header start at line 2.
        let line = index + 1 + usize::from(self.headers.is_some());
        let deserializer = RecordDeserializer {
            record,
            line,
            headers: self.headers.as_deref(),
        };
        seed.deserialize(deserializer).map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        match self.records.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct RecordDeserializer<'h> {
    record: Record,
    line: usize,
    headers: Option<&'h [String]>,
}

impl<'de> de::Deserializer<'de> for RecordDeserializer<'_> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let line = self.line;
        let result = match self.headers {
            Some(headers) => visitor.visit_map(MapDeserializer::new(
                RecordMap::from_record(headers, self.record),
                line,
            )),
            None => visitor.visit_seq(SeqDeserializer::new(self.record, line)),
        };
        result.map_err(|e| e.at(line, 0))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::iter::Enumerate<std::vec::IntoIter<Value>>,
    line: usize,
}

impl SeqDeserializer {
    fn new(record: Record, line: usize) -> Self {
        SeqDeserializer {
            iter: record.into_iter().enumerate(),
            line,
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((column, value)) => seed
                .deserialize(ValueDeserializer::new(value))
                .map(Some)
                .map_err(|e| e.at(self.line, column + 1)),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: std::iter::Enumerate<indexmap::map::IntoIter<String, Value>>,
    value: Option<(usize, Value)>,
    line: usize,
}

impl MapDeserializer {
    fn new(map: RecordMap, line: usize) -> Self {
        MapDeserializer {
            iter: map.into_iter().enumerate(),
            value: None,
            line,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((column, (key, value))) => {
                self.value = Some((column, value));
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some((column, value)) => seed
                .deserialize(ValueDeserializer::new(value))
                .map_err(|e| e.at(self.line, column + 1)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

/// Deserializes a single field.
struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Undefined => visitor.visit_none(),
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::String(s) => visitor.visit_string(s),
            Value::Integer(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Undefined | Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Undefined | Value::Null => visitor.visit_unit(),
            _ => self.deserialize_any(visitor),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(variant) => visitor.visit_enum(variant.into_deserializer()),
            other => Err(Error::type_mismatch(
                0,
                0,
                "enum variant name",
                other.kind().as_str(),
            )),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit_struct newtype_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}
