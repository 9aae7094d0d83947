use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;
use validation_i18n::{
    Context, DefaultMessages, MessageProvider, diagnostics::MISSING_TRANSLATION_ID,
};

use crate::ResolverTest;

#[test]
fn test_translated_message_is_formatted() -> Result<()> {
    let test = ResolverTest::new()?;
    let messages = test.messages(json!({
        "errors": { "presence": "{{attr}} is required" }
    }))?;

    let result = messages.message_for("presence", &Context::new().with("attr", "Name"));

    assert_eq!(result, "Name is required");
    assert!(test.sink().is_empty());
    Ok(())
}

#[test]
fn test_missing_translation_falls_back_to_default() -> Result<()> {
    let test = ResolverTest::new()?;
    let messages = test.messages(json!({}))?;
    let context = Context::new().with("description", "Age").with("gt", 17);

    let result = messages.message_for("greaterThan", &context);

    assert_eq!(
        result,
        DefaultMessages::new().message_for("greaterThan", &context)
    );
    assert_eq!(result, "Age must be greater than 17");

    let warnings = test.sink().warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].id, MISSING_TRANSLATION_ID);
    insta::assert_snapshot!(warnings[0].message.as_str(), @r"
    [ember-i18n-cp-validations] Missing translation for validation key: errors.greaterThan
    http://offirgolan.github.io/ember-cp-validations/docs/messages/index.html
    ");
    Ok(())
}

#[test]
fn test_configured_prefix() -> Result<()> {
    let test = ResolverTest::with_config(r#"{ "messages": { "prefix": "validations" } }"#)?;
    let messages = test.messages(json!({
        "validations": { "email": "{description} is not an email" },
        "errors": { "email": "wrong namespace" }
    }))?;

    let context = Context::new().with("description", "Contact");
    assert_eq!(messages.message_for("email", &context), "Contact is not an email");
    Ok(())
}

#[test]
fn test_empty_prefix_uses_bare_rule() -> Result<()> {
    let test = ResolverTest::with_config(r#"{ "messages": { "prefix": "" } }"#)?;
    let messages = test.messages(json!({ "odd": "{description} must be odd" }))?;

    let context = Context::new().with("description", "Count");
    assert_eq!(messages.message_for("odd", &context), "Count must be odd");
    Ok(())
}

#[test]
fn test_suppress_warnings_from_config() -> Result<()> {
    let test = ResolverTest::with_config(r#"{ "i18n": { "suppressWarnings": true } }"#)?;
    let messages = test.messages(json!({}))?;

    messages.message_for("presence", &Context::new());

    assert!(test.sink().is_empty());
    Ok(())
}

#[test]
fn test_no_translation_service() -> Result<()> {
    let test = ResolverTest::new()?;
    let messages = test.messages_with(None)?;
    let context = Context::new().with("description", "Email");

    assert_eq!(
        messages.message_for("email", &context),
        "Email must be a valid email address"
    );
    assert!(test.sink().is_empty());
    Ok(())
}

#[test]
fn test_full_error_message() -> Result<()> {
    let test = ResolverTest::new()?;
    let messages = test.messages(json!({
        "errors": {
            "description": "This value",
            "tooLong": "{{description}} exceeds {max} characters"
        }
    }))?;

    let mut context = Context::new().with("max", 20);
    assert_eq!(
        messages.create_error_message("tooLong", "bio", &mut context),
        "This value exceeds 20 characters"
    );
    Ok(())
}
