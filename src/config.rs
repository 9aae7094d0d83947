use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::messages::defaults::DEFAULT_DESCRIPTION;

pub const CONFIG_FILE_NAME: &str = ".validationsrc.json";

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
}

/// Options for the localization layer.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    /// Silence missing-translation warnings.
    #[serde(default)]
    pub suppress_warnings: bool,
}

/// Options for the base message provider.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesConfig {
    /// Translation key prefix. Unset means `errors.`, `""` means no prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Template used when a rule has no message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid: Option<String>,
    #[serde(default = "default_description")]
    pub default_description: String,
    /// Per-rule template overrides.
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            invalid: None,
            default_description: default_description(),
            templates: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a template is registered under a name that is not
    /// a rule identifier.
    pub fn validate(&self) -> Result<()> {
        for rule in self.messages.templates.keys() {
            let is_identifier =
                !rule.is_empty() && rule.chars().all(|c| c.is_alphanumeric() || c == '_');
            if !is_identifier {
                bail!("Invalid rule name in 'templates': \"{}\"", rule);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let config = read_config(&path)?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}
