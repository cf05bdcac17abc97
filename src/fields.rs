//! Key/value fields attached to log records.
//!
//! A [`Field`] pairs a text key with an arbitrary typed [`serde_json::Value`].
//! Field sequences keep their order all the way to the output; duplicate keys
//! are passed through as-is.

use std::borrow::Cow;
use std::fmt::{self, Write};

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single named, typed key/value pair attached to a log record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    pub value: Value,
}

impl Field {
    /// Create a field from anything convertible into a JSON value.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a field from any serializable value.
    ///
    /// Values that fail to serialize (e.g. maps with non-string keys) are
    /// recorded as the serializer's error text rather than dropped.
    pub fn any<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> Self {
        let value = serde_json::to_value(value).unwrap_or_else(|e| Value::String(e.to_string()));
        Self {
            key: key.into(),
            value,
        }
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for Field {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", format_key(&self.key), format_value(&self.value))
    }
}

/// Append `key=value` to `out`, separated from earlier content by one space.
///
/// Keys are quoted by the same rule as string values and dimmed when
/// `use_color` is set.
pub fn write_pair(out: &mut String, key: &str, value: &str, use_color: bool) {
    if !out.is_empty() {
        out.push(' ');
    }
    let key = format_key(key);
    if use_color {
        let _ = write!(out, "{}={value}", key.truecolor(150, 150, 150));
    } else {
        let _ = write!(out, "{key}={value}");
    }
}

/// Append every field of `fields`, in order, with [`write_pair`].
pub fn write_fields(out: &mut String, fields: &[Field], use_color: bool) {
    for field in fields {
        write_pair(out, &field.key, &format_value(&field.value), use_color);
    }
}

/// Build a `Vec<Field>` from `key => value` pairs.
///
/// ```
/// use fieldlog::fields;
///
/// let fs = fields!["n" => 42, "name" => "x"];
/// assert_eq!(fs.len(), 2);
/// assert_eq!(fs[0].key, "n");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::Field>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Field::new($key, $value)),+]
    };
}

/// Format a JSON value for display.
///
/// - Strings: unquoted, unless empty or containing whitespace, `"` or `=`
/// - Numbers/bools: as-is
/// - Null: "null"
/// - Arrays/objects: compact JSON
pub fn format_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) if needs_quoting(s) => Cow::Owned(Value::String(s.clone()).to_string()),
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Format a field key: as-is, or JSON-quoted when it could be mistaken for
/// part of a value.
pub fn format_key(key: &str) -> Cow<'_, str> {
    if needs_quoting(key) {
        Cow::Owned(Value::String(key.to_string()).to_string())
    } else {
        Cow::Borrowed(key)
    }
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty() || s.chars().any(|c| c.is_whitespace() || c == '"' || c == '=' || c.is_control())
}
