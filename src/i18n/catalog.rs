//! In-memory translation catalog.

use std::collections::HashMap;

use serde_json::Value;

use crate::context::Context;
use crate::i18n::{SafeString, Translation, Translator};

#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogEntry {
    Text(String),
    Markup(String),
}

/// Translations for a single locale, keyed by dotted path.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a catalog from nested translation data.
    ///
    /// Objects are flattened with `.` separators; only string leaves become
    /// entries.
    pub fn from_json(locale: impl Into<String>, json: &Value) -> Self {
        let mut catalog = Self::new(locale);
        flatten_json(json, String::new(), &mut catalog);
        catalog
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(key.into(), CatalogEntry::Text(value.into()));
    }

    /// Insert a value that is handed out as markup-safe.
    pub fn insert_safe(&mut self, key: impl Into<String>, markup: impl Into<String>) {
        self.entries
            .insert(key.into(), CatalogEntry::Markup(markup.into()));
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_safe(mut self, key: impl Into<String>, markup: impl Into<String>) -> Self {
        self.insert_safe(key, markup);
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn exists(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn t(&self, key: &str, _context: &Context) -> Translation {
        match self.entries.get(key) {
            Some(CatalogEntry::Text(text)) => Translation::Text(text.clone()),
            Some(CatalogEntry::Markup(markup)) => SafeString::new(markup.clone()).into(),
            None => Translation::Text(format!("missing translation: {}", key)),
        }
    }
}

fn flatten_json(value: &Value, prefix: String, result: &mut Catalog) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        Value::String(s) => {
            if !prefix.is_empty() {
                result.insert(prefix, s.clone());
            }
        }
        _ => {}
    }
}
