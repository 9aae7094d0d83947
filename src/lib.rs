//! validation-i18n - localized validation messages
//!
//! Routes the messages of failed validation rules through a translation
//! service. Keys are derived from the rule type and a configurable prefix
//! (`errors.presence`, `errors.description`), can be overridden per field,
//! and fall back to the stock English messages when no translation exists.
//!
//! ## Module Structure
//!
//! - `config`: Configuration file loading and parsing
//! - `context`: Per-call placeholder values and overrides
//! - `diagnostics`: Missing-translation warnings
//! - `i18n`: Translation service trait and in-memory catalog
//! - `initializer`: Bootstrap of the localized provider
//! - `messages`: Provider trait, default messages, template formatting
//! - `resolver`: The translation-first provider decorator

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod i18n;
pub mod initializer;
pub mod messages;
pub mod resolver;

pub use context::Context;
pub use i18n::{Catalog, HtmlSafe, SafeString, Translation, Translator};
pub use initializer::{ValidationMessages, initialize, initialize_from_dir};
pub use messages::{DefaultMessages, MessageProvider};
pub use resolver::I18nMessages;
