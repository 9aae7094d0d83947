//! Localized message resolution.
//!
//! [`I18nMessages`] wraps a base [`MessageProvider`] and consults a
//! [`Translator`] before falling back to it:
//!
//! - description: `context.description`, else `descriptionKey` or
//!   `<prefix>description` looked up in the translator
//! - message: `messageKey` or `<prefix><rule>` looked up in the translator
//!
//! Translated templates are formatted with the same context the base provider
//! would receive. Missing keys produce an advisory warning, never an error.

use std::sync::Arc;

use crate::config::Config;
use crate::context::Context;
use crate::diagnostics::{
    DiagnosticSink, MISSING_DESCRIPTION_KEY_ID, MISSING_TRANSLATION_ID, StderrSink, WarningMeta,
    missing_description_key_message, missing_translation_message,
};
use crate::i18n::Translator;
use crate::messages::{
    MessageProvider,
    prefix::{DESCRIPTION_SUFFIX, translation_key},
};

/// A message provider that prefers translations over its base provider.
pub struct I18nMessages<P> {
    base: P,
    i18n: Option<Arc<dyn Translator>>,
    sink: Arc<dyn DiagnosticSink>,
    suppress_warnings: bool,
}

impl<P: MessageProvider> I18nMessages<P> {
    /// Decorate `base`. Without a translator every call falls back silently.
    pub fn new(base: P, i18n: Option<Arc<dyn Translator>>) -> Self {
        Self {
            base,
            i18n,
            sink: Arc::new(StderrSink),
            suppress_warnings: false,
        }
    }

    /// Decorate `base`, taking the warning switch from `config`.
    pub fn with_config(base: P, i18n: Option<Arc<dyn Translator>>, config: &Config) -> Self {
        Self::new(base, i18n).suppress_warnings(config.i18n.suppress_warnings)
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn suppress_warnings(mut self, suppress: bool) -> Self {
        self.suppress_warnings = suppress;
        self
    }

    /// `Some(result)` when a translator is installed and knows `key`;
    /// `None` for "no translator" and "key missing" alike.
    fn translate(&self, key: &str, context: &Context) -> Option<String> {
        let i18n = self.i18n.as_ref()?;
        if !i18n.exists(key) {
            return None;
        }
        let template = i18n.t(key, context).into_string();
        Some(self.format_message(Some(&template), context))
    }

    fn emit_warning(&self, message: &str, id: &'static str) {
        if !self.suppress_warnings {
            self.sink.warn(message, &WarningMeta { id });
        }
    }
}

impl<P: MessageProvider> MessageProvider for I18nMessages<P> {
    fn prefix(&self) -> Option<&str> {
        self.base.prefix()
    }

    fn invalid(&self) -> &str {
        self.base.invalid()
    }

    fn description_for(&self, attribute: &str, context: &Context) -> String {
        if let Some(description) = context.description() {
            return description;
        }

        let custom_key = context.description_key();
        let key = custom_key
            .clone()
            .unwrap_or_else(|| translation_key(self.prefix(), DESCRIPTION_SUFFIX));

        if let Some(translated) = self.translate(&key, context) {
            return translated;
        }

        if custom_key.is_some() && self.i18n.is_some() {
            self.emit_warning(
                &missing_description_key_message(&key),
                MISSING_DESCRIPTION_KEY_ID,
            );
        }

        self.base.description_for(attribute, context)
    }

    fn message_for(&self, rule: &str, context: &Context) -> String {
        let key = context
            .message_key()
            .unwrap_or_else(|| translation_key(self.prefix(), rule));

        if let Some(translated) = self.translate(&key, context) {
            return translated;
        }

        if self.i18n.is_some() {
            self.emit_warning(&missing_translation_message(&key), MISSING_TRANSLATION_ID);
        }

        self.base.message_for(rule, context)
    }

    fn format_message(&self, message: Option<&str>, context: &Context) -> String {
        self.base.format_message(message, context)
    }
}
