//! Loosely-typed documents: key → value mappings with optional fields.
//!
//! Accessors are total. A missing field, or a field of the wrong shape,
//! yields `None` rather than an error, so a malformed entry degrades to
//! absent values instead of dropping the row downstream.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A single field value as stored in the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Array(Vec<FieldValue>),
    Map(HashMap<String, FieldValue>),
}

impl FieldValue {
    /// Borrowed string contents, for text fields only.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text rendering for display-oriented fields. Numbers stringify the
    /// way they were stored; structural values yield `None`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Integer(n) => Some(n.to_string()),
            FieldValue::Double(f) => Some(f.to_string()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

/// One document: its id within the collection plus its fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: HashMap<String, FieldValue>,
}

impl Document {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Builder-style field insertion, used by tests and the memory store.
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(FieldValue::as_str)
    }

    pub fn text_field(&self, name: &str) -> Option<String> {
        self.field(name).and_then(FieldValue::as_text)
    }

    pub fn timestamp_field(&self, name: &str) -> Option<DateTime<Utc>> {
        self.field(name).and_then(FieldValue::as_timestamp)
    }
}
