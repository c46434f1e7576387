//! Runtime variable bindings for template resolution.
//!
//! Bindings map placeholder names to values that render as text. Keys that no
//! template references are ignored; referenced keys that are missing render as
//! the empty string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single bound value.
///
/// Non-text values render with their natural string representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BindingValue {
    /// Explicitly absent; renders as the empty string.
    Absent,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for BindingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingValue::Absent => Ok(()),
            BindingValue::Bool(b) => write!(f, "{}", b),
            BindingValue::Integer(n) => write!(f, "{}", n),
            BindingValue::Unsigned(n) => write!(f, "{}", n),
            BindingValue::Float(x) => write!(f, "{}", x),
            BindingValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for BindingValue {
    fn from(value: &str) -> Self {
        BindingValue::Text(value.to_string())
    }
}

impl From<String> for BindingValue {
    fn from(value: String) -> Self {
        BindingValue::Text(value)
    }
}

impl From<i64> for BindingValue {
    fn from(value: i64) -> Self {
        BindingValue::Integer(value)
    }
}

impl From<i32> for BindingValue {
    fn from(value: i32) -> Self {
        BindingValue::Integer(i64::from(value))
    }
}

impl From<u64> for BindingValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(BindingValue::Unsigned(value), BindingValue::Integer)
    }
}

impl From<f64> for BindingValue {
    fn from(value: f64) -> Self {
        BindingValue::Float(value)
    }
}

impl From<bool> for BindingValue {
    fn from(value: bool) -> Self {
        BindingValue::Bool(value)
    }
}

impl<T: Into<BindingValue>> From<Option<T>> for BindingValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(BindingValue::Absent, Into::into)
    }
}

/// Placeholder name to value mapping.
///
/// Ordered so that reports serialize deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableBindings(BTreeMap<String, BindingValue>);

impl VariableBindings {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<BindingValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<BindingValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Get the raw bound value.
    pub fn get(&self, name: &str) -> Option<&BindingValue> {
        self.0.get(name)
    }

    /// Render the value bound to `name`, or the empty string when unbound.
    pub fn render(&self, name: &str) -> String {
        self.0.get(name).map(ToString::to_string).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindingValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for VariableBindings
where
    K: Into<String>,
    V: Into<BindingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Helper to create bindings from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> VariableBindings
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<BindingValue>,
{
    pairs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let b = vars([("name", "Alice")]);
        assert_eq!(b.render("name"), "Alice");
    }

    #[test]
    fn test_render_missing_is_empty() {
        let b = VariableBindings::new();
        assert_eq!(b.render("missing"), "");
        assert!(!b.contains("missing"));
    }

    #[test]
    fn test_render_non_text_values() {
        let b = VariableBindings::new()
            .with("count", 3)
            .with("ratio", 0.5)
            .with("flag", true)
            .with("nothing", None::<String>);
        assert_eq!(b.render("count"), "3");
        assert_eq!(b.render("ratio"), "0.5");
        assert_eq!(b.render("flag"), "true");
        assert_eq!(b.render("nothing"), "");
        assert!(b.contains("nothing"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut b = vars([("x", "1")]);
        b.insert("x", "2");
        assert_eq!(b.len(), 1);
        assert_eq!(b.render("x"), "2");
    }

    #[test]
    fn test_serializes_in_key_order() {
        let b = vars([("zeta", "z"), ("alpha", "a")]);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"alpha":"a","zeta":"z"}"#);
    }

    #[test]
    fn test_deserialize_mixed_values() {
        let b: VariableBindings =
            serde_json::from_str(r#"{"a":"text","b":7,"c":1.5,"d":false,"e":null}"#).unwrap();
        assert_eq!(b.get("a"), Some(&BindingValue::Text("text".to_string())));
        assert_eq!(b.get("b"), Some(&BindingValue::Integer(7)));
        assert_eq!(b.get("c"), Some(&BindingValue::Float(1.5)));
        assert_eq!(b.get("d"), Some(&BindingValue::Bool(false)));
        assert_eq!(b.get("e"), Some(&BindingValue::Absent));
    }

    #[test]
    fn test_large_unsigned_renders_exactly() {
        let b: VariableBindings =
            serde_json::from_str(r#"{"big":18446744073709551615,"small":7}"#).unwrap();
        assert_eq!(b.get("big"), Some(&BindingValue::Unsigned(u64::MAX)));
        assert_eq!(b.render("big"), "18446744073709551615");
        assert_eq!(b.get("small"), Some(&BindingValue::Integer(7)));

        let b = VariableBindings::new().with("max", u64::MAX).with("one", 1u64);
        assert_eq!(b.render("max"), "18446744073709551615");
        assert_eq!(b.get("one"), Some(&BindingValue::Integer(1)));
    }
}
