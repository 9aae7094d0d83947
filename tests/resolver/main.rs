use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Ok, Result};
use serde_json::Value;
use tempfile::TempDir;
use validation_i18n::{
    Catalog, Translator, ValidationMessages, config::CONFIG_FILE_NAME,
    diagnostics::CollectingSink, initialize_from_dir,
};

mod bootstrap;
mod message;

/// An application directory with an optional config file and a translation
/// catalog, wired the way an application would at startup.
pub struct ResolverTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
    sink: Arc<CollectingSink>,
}

impl ResolverTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            sink: Arc::new(CollectingSink::new()),
        })
    }

    pub fn with_config(content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(CONFIG_FILE_NAME, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn sink(&self) -> &CollectingSink {
        &self.sink
    }

    /// Build the provider with translations from `translations`.
    pub fn messages(&self, translations: Value) -> Result<ValidationMessages> {
        let catalog: Arc<dyn Translator> = Arc::new(Catalog::from_json("en", &translations));
        self.messages_with(Some(catalog))
    }

    pub fn messages_with(&self, i18n: Option<Arc<dyn Translator>>) -> Result<ValidationMessages> {
        let messages = initialize_from_dir(self.root(), i18n, false)?;
        Ok(messages.with_sink(self.sink.clone()))
    }
}
