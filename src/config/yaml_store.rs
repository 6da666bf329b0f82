//! File-backed settings store.
//!
//! Settings live in a YAML mapping of sections to options:
//!
//! ```yaml
//! editor:
//!   underline_errors: true
//! lsp:
//!   flake8/exclude: (?!test_).*\.py
//!   linting_provider: flake8
//! ```
//!
//! The whole file is read on open; writes stay in memory until
//! [`ConfigStore::flush`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::store::{ConfigStore, ConfigValue, Sections};
use crate::error::{LintPrefsError, Result};

/// YAML settings file.
#[derive(Debug, Clone)]
pub struct YamlStore {
    path: PathBuf,
    sections: Sections,
    dirty: bool,
}

impl YamlStore {
    /// Open a settings file. A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the file is not a section mapping.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            debug!("No settings file at {}, starting empty", path.display());
            return Ok(Self {
                path,
                sections: Sections::new(),
                dirty: false,
            });
        }

        let content = fs::read_to_string(&path)?;
        let sections: Sections = if content.trim().is_empty() {
            Sections::new()
        } else {
            serde_yaml::from_str(&content).map_err(|e| LintPrefsError::ConfigParseError {
                path: path.clone(),
                message: e.to_string(),
            })?
        };

        debug!("Loaded {} section(s) from {}", sections.len(), path.display());

        Ok(Self {
            path,
            sections,
            dirty: false,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are writes not yet flushed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl ConfigStore for YamlStore {
    fn get(&self, section: &str, key: &str) -> Option<ConfigValue> {
        self.sections.get(section)?.get(key).cloned()
    }

    fn set(&mut self, section: &str, key: &str, value: ConfigValue) -> Result<()> {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
        self.dirty = true;
        Ok(())
    }

    /// Save to disk using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption.
    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let content =
            serde_yaml::to_string(&self.sections).map_err(|e| LintPrefsError::ConfigWriteError {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let temp_path = self.path.with_extension("yml.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        debug!("Wrote settings to {}", self.path.display());
        self.dirty = false;
        Ok(())
    }
}
