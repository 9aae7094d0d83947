use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;
use validation_i18n::{Context, MessageProvider};

use crate::ResolverTest;

#[test]
fn test_config_found_from_nested_directory() -> Result<()> {
    let test = ResolverTest::with_config(
        r#"{ "messages": { "templates": { "present": "{description} is mandatory" } } }"#,
    )?;
    test.write_file("app/validators/.keep", "")?;

    let nested = test.root().join("app").join("validators");
    let messages = validation_i18n::initialize_from_dir(&nested, None, false)?;

    let context = Context::new().with("description", "Title");
    assert_eq!(messages.message_for("present", &context), "Title is mandatory");
    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<()> {
    let test = ResolverTest::with_config(r#"{ "messages": { "templates": { "": "x" } } }"#)?;

    let err = test.messages(json!({})).err().expect("config should be rejected");
    assert!(err.to_string().contains("templates"));
    Ok(())
}

#[test]
fn test_defaults_without_config_file() -> Result<()> {
    let test = ResolverTest::new()?;
    let messages = test.messages(json!({}))?;

    assert_eq!(messages.prefix(), None);
    assert_eq!(
        messages.description_for("anything", &Context::new()),
        "This field"
    );
    Ok(())
}
