//! Shared models for the order server's JSON documents.
//!
//! Contains the order identifier newtype and [`DisplayValue`], the opaque
//! scalar every order field is carried as.

pub mod order;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub use order::{Delivery, Item, Order, Payment};

/// A non-empty, user-supplied order identifier.
///
/// No format is imposed; the empty string is the "no lookup" sentinel and is
/// the only value rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Wraps `value`, returning `None` for the empty string.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the identifier exactly as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Any JSON scalar the server sends for a display field.
///
/// Strings display verbatim, numbers and booleans display as their JSON
/// text, and an absent or `null` field displays as the empty string. Arrays
/// and objects are not expected but display as compact JSON rather than
/// failing the whole order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayValue(serde_json::Value);

impl DisplayValue {
    /// Returns the string payload if the server sent a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Returns `true` when the field was absent or `null`.
    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self(serde_json::Value::String(value.to_string()))
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        Self(serde_json::Value::from(value))
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::Null => Ok(()),
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// Deserializes `null` the same way as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
