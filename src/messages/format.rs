//! Placeholder substitution for message templates.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

use crate::context::Context;

/// Matches `{{name}}` or `{name}`; the name is captured by group 1 or 2.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}|\{(\w+)\}").unwrap());

/// Replace every placeholder in `template` with its value from `context`.
///
/// Substitution is a single left-to-right pass: text inserted from the
/// context is never scanned again, so a value containing `{name}` stays
/// literal. Unknown names are replaced with an empty string.
///
/// # Examples
///
/// ```
/// use validation_i18n::Context;
/// use validation_i18n::messages::format::interpolate;
///
/// let context = Context::new().with("val", 5).with("other", "N/A");
/// assert_eq!(
///     interpolate("Value is {{val}} or {other}", &context),
///     "Value is 5 or N/A"
/// );
/// ```
pub fn interpolate<'a>(template: &'a str, context: &Context) -> Cow<'a, str> {
    PLACEHOLDER_REGEX.replace_all(template, |caps: &Captures| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|name| context.value_text(name.as_str()))
            .unwrap_or_default()
    })
}
