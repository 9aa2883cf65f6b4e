//! Infrastructure implementation of the `TemplateSource` port.
//!
//! Templates live at `<cwd>/cloud_formation/<app_name>.json`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::TemplateSource;
use crate::domain::error::TemplateError;

/// Loads the application template from the local filesystem.
pub struct FileTemplateSource {
    dir: PathBuf,
    app_name: String,
}

impl FileTemplateSource {
    /// Create a source rooted at the default directory
    /// (`<cwd>/cloud_formation`).
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new(app_name: &str) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        Ok(Self::with_dir(cwd.join("cloud_formation"), app_name))
    }

    /// Create a source with an explicit directory (used in tests).
    #[must_use]
    pub fn with_dir(dir: PathBuf, app_name: &str) -> Self {
        Self {
            dir,
            app_name: app_name.to_owned(),
        }
    }
}

impl TemplateSource for FileTemplateSource {
    fn template_file(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.app_name))
    }

    fn body(&self) -> Result<String> {
        let path = self.template_file();
        if !path.exists() {
            return Err(TemplateError::NotFound { path }.into());
        }
        let body = std::fs::read_to_string(&path).map_err(|e| TemplateError::Unreadable {
            path,
            reason: e.to_string(),
        })?;
        Ok(body)
    }
}
