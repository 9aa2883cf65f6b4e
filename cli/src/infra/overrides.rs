//! Infrastructure implementation of the `OverrideStore` port.
//!
//! `YamlOverrideStore` persists each stack's parameter overrides as a flat
//! string-to-string YAML mapping at
//! `<cwd>/cloud_formation/parameters/<stack_name>.yml`, using async
//! load/save via `tokio::task::spawn_blocking` with atomic write (temp file
//! + rename) to prevent corruption.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::OverrideStore;
use crate::domain::error::PersistenceError;

/// File extension for override documents.
const OVERRIDES_EXT: &str = "yml";

/// YAML-backed override store rooted at a parameters directory.
pub struct YamlOverrideStore {
    dir: PathBuf,
}

impl YamlOverrideStore {
    /// Create a store using the default directory
    /// (`<cwd>/cloud_formation/parameters`).
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        Ok(Self::with_dir(cwd.join("cloud_formation").join("parameters")))
    }

    /// Create a store with an explicit directory (used in tests).
    #[must_use]
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Deterministic override file path for a stack name.
    #[must_use]
    pub fn overrides_file(&self, stack_name: &str) -> PathBuf {
        self.dir.join(format!("{stack_name}.{OVERRIDES_EXT}"))
    }

    fn load_sync(&self, stack_name: &str) -> Result<BTreeMap<String, String>> {
        let path = self.overrides_file(stack_name);
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| PersistenceError::Unreadable {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        // An empty document is an empty mapping, not an error.
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let overrides = serde_yaml::from_str(&content).map_err(|e| {
            PersistenceError::Malformed {
                path,
                reason: e.to_string(),
            }
        })?;
        Ok(overrides)
    }

    fn save_sync(&self, stack_name: &str, overrides: &BTreeMap<String, String>) -> Result<()> {
        let path = self.overrides_file(stack_name);
        let unwritable = |e: &dyn std::fmt::Display| PersistenceError::Unwritable {
            path: path.clone(),
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| unwritable(&e))?;
        }
        let content = serde_yaml::to_string(overrides).map_err(|e| unwritable(&e))?;

        // Atomic write via temp file then rename.
        let temp_path = path.with_extension(format!("{OVERRIDES_EXT}.tmp"));
        std::fs::write(&temp_path, &content).map_err(|e| unwritable(&e))?;
        std::fs::rename(&temp_path, &path).map_err(|e| unwritable(&e))?;
        Ok(())
    }
}

impl OverrideStore for YamlOverrideStore {
    async fn load(&self, stack_name: &str) -> Result<BTreeMap<String, String>> {
        let dir = self.dir.clone();
        let stack_name = stack_name.to_owned();
        tokio::task::spawn_blocking(move || {
            let store = YamlOverrideStore::with_dir(dir);
            store.load_sync(&stack_name)
        })
        .await
        .context("override load task panicked")?
    }

    async fn save(&self, stack_name: &str, overrides: &BTreeMap<String, String>) -> Result<()> {
        let dir = self.dir.clone();
        let stack_name = stack_name.to_owned();
        let overrides = overrides.clone();
        tokio::task::spawn_blocking(move || {
            let store = YamlOverrideStore::with_dir(dir);
            store.save_sync(&stack_name, &overrides)
        })
        .await
        .context("override save task panicked")?
    }
}
