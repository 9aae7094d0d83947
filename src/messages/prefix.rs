//! Translation key prefixes.

use std::borrow::Cow;

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "errors.";

/// Suffix of the key used to look up a field description.
pub const DESCRIPTION_SUFFIX: &str = "description";

/// Normalize a configured prefix into the form prepended to key suffixes.
///
/// - unset: [`DEFAULT_PREFIX`]
/// - `""`: kept empty, keys are the bare suffix
/// - anything else: a trailing `.` is appended unless already present
pub fn normalize_prefix(prefix: Option<&str>) -> Cow<'_, str> {
    match prefix {
        None => Cow::Borrowed(DEFAULT_PREFIX),
        Some("") => Cow::Borrowed(""),
        Some(p) if p.ends_with('.') => Cow::Borrowed(p),
        Some(p) => Cow::Owned(format!("{}.", p)),
    }
}

/// Build `<normalized prefix><suffix>`.
pub fn translation_key(prefix: Option<&str>, suffix: &str) -> String {
    format!("{}{}", normalize_prefix(prefix), suffix)
}
