//! Advisory warnings emitted while resolving messages.
//!
//! Warnings never affect the result of a resolution; they only tell the
//! developer that a translation is missing. Each carries a stable id so it
//! can be filtered.

use std::sync::Mutex;

use colored::Colorize;

/// Id of the warning for a missing rule translation.
pub const MISSING_TRANSLATION_ID: &str = "ember-i18n-cp-validations-missing-translation";

/// Id of the warning for a `descriptionKey` with no translation.
pub const MISSING_DESCRIPTION_KEY_ID: &str = "ember-i18n-cp-validations-missing-description-key";

/// Where to learn how validation message keys are laid out.
pub const MESSAGES_DOCS_URL: &str =
    "http://offirgolan.github.io/ember-cp-validations/docs/messages/index.html";

/// Metadata attached to every warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningMeta {
    pub id: &'static str,
}

/// Receives advisory warnings. Implementations must not panic.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str, meta: &WarningMeta);
}

/// Prints warnings to stderr. Respects `NO_COLOR`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn warn(&self, message: &str, meta: &WarningMeta) {
        eprintln!(
            "{} {} {}",
            "warning:".bold().yellow(),
            message,
            format!("[{}]", meta.id).as_str().dimmed()
        );
    }
}

/// A warning captured by [`CollectingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub id: &'static str,
}

/// Keeps every warning in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<Warning>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings received so far.
    pub fn warnings(&self) -> Vec<Warning> {
        match self.warnings.lock() {
            Ok(warnings) => warnings.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.warnings().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&self, message: &str, meta: &WarningMeta) {
        let warning = Warning {
            message: message.to_string(),
            id: meta.id,
        };
        match self.warnings.lock() {
            Ok(mut warnings) => warnings.push(warning),
            Err(poisoned) => poisoned.into_inner().push(warning),
        }
    }
}

pub fn missing_translation_message(key: &str) -> String {
    format!(
        "[ember-i18n-cp-validations] Missing translation for validation key: {}\n{}",
        key, MESSAGES_DOCS_URL
    )
}

pub fn missing_description_key_message(key: &str) -> String {
    format!(
        "Custom descriptionKey {} provided but does not exist in i18n translations.",
        key
    )
}
