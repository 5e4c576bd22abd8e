// Copyright 2025 Slogger Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Key-value attributes attached to log records.

use std::error::Error;
use std::fmt;

/// A key-value pair attached to a log record.
///
/// Attributes are either scalar values or named groups of nested attributes.
/// Groups render as nested objects in JSON output and as dotted keys
/// (`system.service=orders`) in text output.
///
/// # Examples
///
/// ```
/// use slogger::Attr;
///
/// let env = Attr::new("env", "production");
/// let peer = Attr::group("peer", [Attr::new("host", "10.0.0.7"), Attr::new("port", 443u64)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub(crate) key: String,
    pub(crate) value: Value,
}

impl Attr {
    /// Create an attribute from a key and a scalar value.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Attr {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a grouped attribute holding nested attributes.
    pub fn group(key: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Attr {
            key: key.into(),
            value: Value::Group(attrs.into_iter().collect()),
        }
    }

    /// Render an error under the fixed key `error`.
    ///
    /// The key is always emitted so that downstream consumers see a consistent
    /// field regardless of error state; an absent error renders as an empty
    /// string.
    ///
    /// # Examples
    ///
    /// ```
    /// use slogger::Attr;
    ///
    /// let err = std::io::Error::other("connection reset");
    /// let attr = Attr::error(Some(&err));
    /// assert_eq!(attr.key(), "error");
    /// ```
    pub fn error(err: Option<&dyn Error>) -> Self {
        let message = err.map(|e| e.to_string()).unwrap_or_default();
        Attr::new("error", message)
    }

    /// The attribute key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attribute value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// The value half of an [`Attr`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value.
    Str(String),
    /// A signed integer value.
    I64(i64),
    /// An unsigned integer value.
    U64(u64),
    /// A floating point value.
    F64(f64),
    /// A boolean value.
    Bool(bool),
    /// A named group of nested attributes.
    Group(Vec<Attr>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(v) => f.write_str(v),
            Value::I64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Group(attrs) => {
                f.write_str("[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}={}", attr.key, attr.value)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I64(value as i64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::U64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_attr_with_error() {
        let err = std::io::Error::other("boom");
        let attr = Attr::error(Some(&err));
        assert_eq!(attr.key(), "error");
        assert_eq!(attr.value(), &Value::Str("boom".to_owned()));
    }

    #[test]
    fn test_error_attr_without_error() {
        let attr = Attr::error(None);
        assert_eq!(attr.key(), "error");
        assert_eq!(attr.value(), &Value::Str(String::new()));
    }

    #[test]
    fn test_group_display() {
        let attr = Attr::group("system", [Attr::new("service", "orders")]);
        assert_eq!(attr.value().to_string(), "[service=orders]");
    }
}
