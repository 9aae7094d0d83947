//! Localization service interface.
//!
//! The resolver only needs two things from a translation backend: whether a
//! key exists, and the value stored under it. Backends may hand back
//! markup-safe values; anything implementing [`HtmlSafe`] is accepted and
//! unwrapped to plain text before use.

use std::fmt;

use crate::context::Context;

pub mod catalog;

pub use catalog::Catalog;

/// A key to string lookup facility.
pub trait Translator: Send + Sync {
    /// Whether `key` has a translation.
    fn exists(&self, key: &str) -> bool;

    /// Translation for `key`, with `context` available as interpolation data.
    fn t(&self, key: &str, context: &Context) -> Translation;
}

/// Capability of values whose string content is already sanitized markup.
pub trait HtmlSafe: Send + Sync {
    /// The underlying markup as a plain string.
    fn to_html_string(&self) -> String;
}

/// Value returned by a [`Translator`].
pub enum Translation {
    Text(String),
    Markup(Box<dyn HtmlSafe>),
}

impl Translation {
    pub fn markup(value: impl HtmlSafe + 'static) -> Self {
        Translation::Markup(Box::new(value))
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Translation::Markup(_))
    }

    /// Plain-string form; markup-safe values are unwrapped.
    pub fn into_string(self) -> String {
        match self {
            Translation::Text(text) => text,
            Translation::Markup(markup) => markup.to_html_string(),
        }
    }
}

impl fmt::Debug for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Translation::Markup(markup) => f
                .debug_tuple("Markup")
                .field(&markup.to_html_string())
                .finish(),
        }
    }
}

impl From<String> for Translation {
    fn from(text: String) -> Self {
        Translation::Text(text)
    }
}

impl From<&str> for Translation {
    fn from(text: &str) -> Self {
        Translation::Text(text.to_string())
    }
}

impl From<SafeString> for Translation {
    fn from(value: SafeString) -> Self {
        Translation::markup(value)
    }
}

/// A string marked as safe markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeString(String);

impl SafeString {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl HtmlSafe for SafeString {
    fn to_html_string(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
