//! Application bootstrap.
//!
//! Builds the localized message provider once, at startup, from the
//! configuration file and the application's translation service.

use std::{path::Path, sync::Arc};

use anyhow::Result;

use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::i18n::Translator;
use crate::messages::DefaultMessages;
use crate::resolver::I18nMessages;

/// The provider installed by [`initialize`].
pub type ValidationMessages = I18nMessages<DefaultMessages>;

/// Install the translation service in front of the default messages.
pub fn initialize(config: &Config, i18n: Option<Arc<dyn Translator>>) -> ValidationMessages {
    let base = DefaultMessages::from_config(&config.messages);
    I18nMessages::with_config(base, i18n, config)
}

/// Like [`initialize`], loading the configuration file found from `start_dir`.
pub fn initialize_from_dir(
    start_dir: &Path,
    i18n: Option<Arc<dyn Translator>>,
    verbose: bool,
) -> Result<ValidationMessages> {
    let config_result = load_config(start_dir)?;

    if verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    Ok(initialize(&config_result.config, i18n))
}
