//! Row cell values and the read-only row interface.
//!
//! A row is a decoded record from the import source: a mapping from column
//! name to [`Value`]. Values deserialize untagged, so a plain JSON object
//! such as `{"title": "Widget", "price": 0}` decodes straight into a row.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FallbackResult};

/// A single cell value in an import row.
///
/// # Examples
///
/// ```
/// use column_fallback::Value;
///
/// assert!(Value::String(String::new()).is_empty());
/// assert!(Value::Int(0).is_empty());
/// assert!(!Value::String("Hello".to_string()).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns true if the value carries nothing usable.
    ///
    /// Null, a zero-length string, `false`, numeric zero and empty
    /// containers are empty. Whitespace-only strings are not.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(v) => !v,
            Self::Int(v) => *v == 0,
            Self::Float(v) => *v == 0.0,
            Self::String(v) => v.is_empty(),
            Self::List(v) => v.is_empty(),
            Self::Map(v) => v.is_empty(),
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a string describing the type of this value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Read-only access to a decoded import row.
pub trait Row {
    /// Returns the value stored under `column`, or `None` if the key is absent.
    fn get(&self, column: &str) -> Option<&Value>;
}

impl Row for HashMap<String, Value> {
    fn get(&self, column: &str) -> Option<&Value> {
        HashMap::get(self, column)
    }
}

impl Row for BTreeMap<String, Value> {
    fn get(&self, column: &str) -> Option<&Value> {
        BTreeMap::get(self, column)
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn get(&self, column: &str) -> Option<&Value> {
        (**self).get(column)
    }
}

/// Decodes a JSON object into a row.
///
/// # Errors
/// Returns a configuration error if `json` is not a JSON object.
pub fn row_from_json(json: &str) -> FallbackResult<BTreeMap<String, Value>> {
    serde_json::from_str(json).map_err(|e| {
        ConfigError::Parse {
            message: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(Value::Null.is_empty());
        assert!(Value::Bool(false).is_empty());
        assert!(Value::Int(0).is_empty());
        assert!(Value::Float(0.0).is_empty());
        assert!(Value::String(String::new()).is_empty());
        assert!(Value::List(vec![]).is_empty());
        assert!(Value::Map(BTreeMap::new()).is_empty());

        assert!(!Value::Bool(true).is_empty());
        assert!(!Value::Int(-3).is_empty());
        assert!(!Value::Float(0.5).is_empty());
        assert!(!Value::String(" ".to_string()).is_empty());
        assert!(!Value::List(vec![Value::Null]).is_empty());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_row_from_json_untagged() {
        let row = row_from_json(r#"{"title": "Widget", "price": 0, "ratio": 1.5, "tags": [], "note": null}"#)
            .unwrap();
        assert_eq!(row.get("title"), Some(&Value::String("Widget".to_string())));
        assert_eq!(row.get("price"), Some(&Value::Int(0)));
        assert_eq!(row.get("ratio"), Some(&Value::Float(1.5)));
        assert_eq!(row.get("tags"), Some(&Value::List(vec![])));
        assert_eq!(row.get("note"), Some(&Value::Null));
    }

    #[test]
    fn test_row_from_json_rejects_non_object() {
        let err = row_from_json("[1, 2]").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_row_trait_on_hashmap() {
        let mut row: HashMap<String, Value> = HashMap::new();
        row.insert("a".to_string(), Value::from("x"));
        assert_eq!(Row::get(&row, "a").and_then(Value::as_str), Some("x"));
        assert!(Row::get(&row, "b").is_none());
    }
}
