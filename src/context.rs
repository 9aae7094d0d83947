//! Per-call validation context.
//!
//! A [`Context`] carries the values a failing validator exposes to message
//! templates (`{description}`, `{max}`, ...) together with a few reserved
//! override fields that steer key resolution.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved field: literal description that bypasses any lookup.
pub const DESCRIPTION: &str = "description";
/// Reserved field: translation key used instead of `<prefix>description`.
pub const DESCRIPTION_KEY: &str = "descriptionKey";
/// Reserved field: translation key used instead of `<prefix><type>`.
pub const MESSAGE_KEY: &str = "messageKey";
/// Reserved field: template used instead of the rule's default message.
pub const MESSAGE: &str = "message";

/// Placeholder values and overrides for a single failed rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: Map<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Stringified value of `name`, or `""` when absent.
    pub fn value_text(&self, name: &str) -> String {
        self.get(name).map(stringify).unwrap_or_default()
    }

    /// Stringified value of `name` when it is present and non-empty.
    ///
    /// `null`, `""` and empty arrays count as absent.
    pub fn present(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::Null => None,
            Value::Array(items) if items.is_empty() => None,
            value => Some(stringify(value)).filter(|text| !text.is_empty()),
        }
    }

    /// Like [`present`](Self::present), but strings made only of whitespace
    /// also count as absent.
    pub fn present_non_blank(&self, name: &str) -> Option<String> {
        self.present(name).filter(|text| !text.trim().is_empty())
    }

    pub fn description(&self) -> Option<String> {
        self.present(DESCRIPTION)
    }

    pub fn description_key(&self) -> Option<String> {
        self.present(DESCRIPTION_KEY)
    }

    pub fn message_key(&self) -> Option<String> {
        self.present_non_blank(MESSAGE_KEY)
    }

    pub fn message(&self) -> Option<String> {
        self.present(MESSAGE)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for Context {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Render a JSON value the way it appears inside a message.
///
/// Strings are inserted verbatim, `null` becomes empty, everything else uses
/// its compact JSON text.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
