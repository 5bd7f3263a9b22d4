//! Generic key/value documents for fixed-schema shapes.
//!
//! Each shape owns a static field table: the document key, in declaration
//! order, and an extractor that reads the field off the record and coerces it
//! to a JSON value. The table is the schema, so a document always has the
//! shape's keys in the shape's order and serializes to the same bytes for the
//! same record.

use prost_types::Timestamp;
use serde_json::{Map, Value};

use super::to_hex;
use crate::etl::entity::EntityKind;

/// One column of a shape's field table.
pub struct FieldSpec<R> {
    pub name: &'static str,
    pub extract: fn(&R) -> Value,
}

/// A schema-defined record layout.
///
/// Implemented for every event and call message in [`crate::pb::contract_v1`]
/// by the tables in `shapes.rs`.
pub trait Shape: Sized + 'static {
    /// Canonical `type` tag stored on the entity.
    const TYPE_NAME: &'static str;
    /// Whether records of this shape become events or calls.
    const KIND: EntityKind;

    /// Hash of the transaction the record originates from.
    fn tx_hash(&self) -> &str;

    /// Field table in declaration order.
    fn fields() -> &'static [FieldSpec<Self>];
}

/// Coercion of a record field into a document value.
pub trait DocValue {
    fn doc_value(&self) -> Value;
}

impl DocValue for String {
    fn doc_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl DocValue for bool {
    fn doc_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl DocValue for u32 {
    fn doc_value(&self) -> Value {
        Value::from(*self)
    }
}

impl DocValue for u64 {
    fn doc_value(&self) -> Value {
        Value::from(*self)
    }
}

impl DocValue for i64 {
    fn doc_value(&self) -> Value {
        Value::from(*self)
    }
}

impl DocValue for Vec<u8> {
    fn doc_value(&self) -> Value {
        Value::String(to_hex(self))
    }
}

/// Whole seconds since the epoch; an absent timestamp is `null`.
impl DocValue for Option<Timestamp> {
    fn doc_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, |ts| Value::from(ts.seconds))
    }
}

/// Ordered key/value document projected from one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Projects `record` through its shape's field table.
    pub fn project<S: Shape>(record: &S) -> Self {
        let fields = S::fields()
            .iter()
            .map(|field| (field.name.to_string(), (field.extract)(record)))
            .collect();
        Self { fields }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Compact JSON, keys in declaration order.
    pub fn to_json(&self) -> String {
        // Display on a JSON value cannot fail.
        Value::Object(self.fields.clone()).to_string()
    }
}
