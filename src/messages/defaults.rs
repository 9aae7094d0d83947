//! Stock English validation messages.

use std::collections::HashMap;

use crate::config::MessagesConfig;
use crate::context::Context;
use crate::messages::MessageProvider;

/// Description used when a field has none of its own.
pub const DEFAULT_DESCRIPTION: &str = "This field";

/// Rule name of the fallback template.
pub const INVALID: &str = "invalid";

/// Fallback template for rules without a message.
pub const DEFAULT_INVALID: &str = "{description} is invalid";

/// Built-in templates keyed by rule type.
pub const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("inclusion", "{description} is not included in the list"),
    ("exclusion", "{description} is reserved"),
    (INVALID, DEFAULT_INVALID),
    ("confirmation", "{description} doesn't match {on}"),
    ("accepted", "{description} must be accepted"),
    ("empty", "{description} can't be empty"),
    ("blank", "{description} must be blank"),
    ("present", "{description} can't be blank"),
    ("collection", "{description} must be a collection"),
    ("singular", "{description} can't be a collection"),
    ("tooLong", "{description} is too long (maximum is {max} characters)"),
    ("tooShort", "{description} is too short (minimum is {min} characters)"),
    ("before", "{description} must be before {before}"),
    ("onOrBefore", "{description} must be on or before {onOrBefore}"),
    ("after", "{description} must be after {after}"),
    ("onOrAfter", "{description} must be on or after {onOrAfter}"),
    ("wrongDateFormat", "{description} must be in the format of {format}"),
    ("wrongLength", "{description} is the wrong length (should be {is} characters)"),
    ("notANumber", "{description} must be a number"),
    ("notAnInteger", "{description} must be an integer"),
    ("greaterThan", "{description} must be greater than {gt}"),
    ("greaterThanOrEqualTo", "{description} must be greater than or equal to {gte}"),
    ("equalTo", "{description} must be equal to {is}"),
    ("lessThan", "{description} must be less than {lt}"),
    ("lessThanOrEqualTo", "{description} must be less than or equal to {lte}"),
    ("otherThan", "{description} must be other than {value}"),
    ("odd", "{description} must be odd"),
    ("even", "{description} must be even"),
    ("positive", "{description} must be positive"),
    ("date", "{description} must be a valid date"),
    ("email", "{description} must be a valid email address"),
    ("phone", "{description} must be a valid phone number"),
    ("url", "{description} must be a valid url"),
];

/// The validation library's own, non-localized message provider.
#[derive(Debug, Clone)]
pub struct DefaultMessages {
    prefix: Option<String>,
    default_description: String,
    templates: HashMap<String, String>,
}

impl Default for DefaultMessages {
    fn default() -> Self {
        Self {
            prefix: None,
            default_description: DEFAULT_DESCRIPTION.to_string(),
            templates: DEFAULT_TEMPLATES
                .iter()
                .map(|(rule, template)| (rule.to_string(), template.to_string()))
                .collect(),
        }
    }
}

impl DefaultMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `messages` section of the configuration file.
    pub fn from_config(config: &MessagesConfig) -> Self {
        let mut messages = Self::new().with_default_description(&config.default_description);
        messages.prefix = config.prefix.clone();
        if let Some(invalid) = &config.invalid {
            messages = messages.with_template(INVALID, invalid);
        }
        for (rule, template) in &config.templates {
            messages = messages.with_template(rule, template);
        }
        messages
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// Register or replace the template for `rule`.
    pub fn with_template(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(rule.into(), template.into());
        self
    }

    pub fn template(&self, rule: &str) -> Option<&str> {
        self.templates.get(rule).map(String::as_str)
    }

    pub fn default_description(&self) -> &str {
        &self.default_description
    }
}

impl MessageProvider for DefaultMessages {
    fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn invalid(&self) -> &str {
        self.template(INVALID).unwrap_or(DEFAULT_INVALID)
    }

    fn description_for(&self, _attribute: &str, context: &Context) -> String {
        context
            .description()
            .unwrap_or_else(|| self.default_description.clone())
    }

    fn message_for(&self, rule: &str, context: &Context) -> String {
        self.format_message(self.template(rule), context)
    }
}
