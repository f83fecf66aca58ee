//! Tri-state field access over loosely typed JSON records.
//!
//! Records are kept as raw [`serde_json::Value`] maps rather than
//! deserialized into structs: a typed decode stops at the first wrong field,
//! while validation has to report every one.

use std::fmt;

use serde_json::{Map, Value};

/// Expected kind of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A JSON string.
    String,
    /// Any JSON number, integral or not. Never a boolean.
    Number,
    /// A JSON number with a whole-number representation. Never a boolean.
    Integer,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl ValueKind {
    /// Check whether `value` is of this kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            // Booleans are rejected wherever a numeric value is expected.
            (Self::Number | Self::Integer, Value::Bool(_)) => false,
            (Self::Number, Value::Number(_)) => true,
            (Self::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (Self::String, Value::String(_)) => true,
            (Self::Array, Value::Array(_)) => true,
            (Self::Object, Value::Object(_)) => true,
            _ => false,
        }
    }

    /// Noun phrase used in "must be ..." messages.
    #[must_use]
    pub fn article_name(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Number => "a number",
            Self::Integer => "an integer",
            Self::Array => "an array",
            Self::Object => "an object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.article_name())
    }
}

/// Outcome of checking a field against an expected kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Key not present in the record.
    Absent,
    /// Present with the expected kind.
    Valid,
    /// Present with some other kind.
    WrongKind,
}

/// A field lookup that distinguishes absence from presence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    /// Key not present.
    Absent,
    /// Key present with this value (of any kind, including `null`).
    Present(&'a Value),
}

impl<'a> Field<'a> {
    /// Classify this field against `kind`.
    #[must_use]
    pub fn check(self, kind: ValueKind) -> FieldState {
        match self {
            Self::Absent => FieldState::Absent,
            Self::Present(value) if kind.matches(value) => FieldState::Valid,
            Self::Present(_) => FieldState::WrongKind,
        }
    }

    /// The value, if present.
    #[must_use]
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }

    /// True if the key exists.
    #[must_use]
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Read-only view over one record (one weapon, item, enemy or character).
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> RecordView<'a> {
    /// View `value` as a record, if it is a JSON object.
    #[must_use]
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    /// Look up `key`.
    #[must_use]
    pub fn field(&self, key: &str) -> Field<'a> {
        self.fields.get(key).map_or(Field::Absent, Field::Present)
    }

    /// The value of `key` if it is a string.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&'a str> {
        self.field(key).value().and_then(Value::as_str)
    }

    /// The value of `key` if it is a non-empty string.
    #[must_use]
    pub fn non_empty_str(&self, key: &str) -> Option<&'a str> {
        self.str_field(key).filter(|s| !s.is_empty())
    }

    /// Iterate over all key/value pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.fields.iter()
    }
}
