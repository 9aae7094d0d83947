//! Validation message providers.
//!
//! A [`MessageProvider`] turns a failed rule into text. [`DefaultMessages`]
//! is the stock English provider; the i18n resolver decorates any provider.

use crate::context::{Context, DESCRIPTION};

pub mod defaults;
pub mod format;
pub mod prefix;

pub use defaults::DefaultMessages;

// ============================================================
// Provider Trait
// ============================================================

/// Produces descriptions and error messages for failed validation rules.
pub trait MessageProvider {
    /// Configured translation key prefix, `None` when unset.
    fn prefix(&self) -> Option<&str>;

    /// Template used when a message is missing.
    fn invalid(&self) -> &str;

    /// Human-readable label for the failing field.
    fn description_for(&self, attribute: &str, context: &Context) -> String;

    /// Error text for the rule identified by `rule`.
    fn message_for(&self, rule: &str, context: &Context) -> String;

    /// Substitute placeholders in `message`, or in [`invalid`](Self::invalid)
    /// when no message is given.
    fn format_message(&self, message: Option<&str>, context: &Context) -> String {
        let template = message.unwrap_or_else(|| self.invalid());
        format::interpolate(template, context).into_owned()
    }

    /// Build the full error message for a failed rule.
    ///
    /// The resolved description is stored in `context` under `description`
    /// first, so message templates can refer to it. A `message` field in the
    /// context replaces the rule's own template.
    fn create_error_message(&self, rule: &str, attribute: &str, context: &mut Context) -> String {
        let description = self.description_for(attribute, context);
        context.insert(DESCRIPTION, description);

        match context.message() {
            Some(message) => self.format_message(Some(&message), context),
            None => self.message_for(rule, context),
        }
    }
}

impl<P: MessageProvider + ?Sized> MessageProvider for Box<P> {
    fn prefix(&self) -> Option<&str> {
        (**self).prefix()
    }

    fn invalid(&self) -> &str {
        (**self).invalid()
    }

    fn description_for(&self, attribute: &str, context: &Context) -> String {
        (**self).description_for(attribute, context)
    }

    fn message_for(&self, rule: &str, context: &Context) -> String {
        (**self).message_for(rule, context)
    }

    fn format_message(&self, message: Option<&str>, context: &Context) -> String {
        (**self).format_message(message, context)
    }
}

// ============================================================
// Tests
// ============================================================
