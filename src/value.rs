//! The value stored under each Indental key.
//!
//! A key in a category is either scalar-valued or list-valued, never both:
//! both kinds share a single namespace per category, so a second use of a
//! key is always a collision regardless of kind. [`Value`] is the tagged
//! union holding whichever kind the key carries.
//!
//! ## Examples
//!
//! ```rust
//! use textdb::Value;
//!
//! let scalar = Value::from("blue");
//! assert_eq!(scalar.as_str(), Some("blue"));
//!
//! let list = Value::from(vec!["a".to_string(), "b".to_string()]);
//! assert_eq!(list.as_list().map(<[String]>::len), Some(2));
//! ```

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

/// A scalar string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single string value from a `KEY : VALUE` line.
    Scalar(String),
    /// An ordered list populated by list-item lines.
    List(Vec<String>),
}

impl Value {
    /// Returns `true` if this is a scalar value.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns `true` if this is a list value.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// The scalar text, or `None` for a list.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(text) => Some(text),
            Value::List(_) => None,
        }
    }

    /// The list items, or `None` for a scalar.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Scalar(_) => None,
            Value::List(items) => Some(items),
        }
    }

    /// Appends an item; no-op on a scalar. The parser only calls this on
    /// the currently open list.
    pub(crate) fn push_item(&mut self, item: String) {
        if let Value::List(items) = self {
            items.push(item);
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Scalar(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Scalar(text)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(text) => f.write_str(text),
            Value::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Scalar(text) => serializer.serialize_str(text),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}
