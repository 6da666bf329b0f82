//! Key-value port for persisted options.
//!
//! The panel only ever talks to a [`ConfigStore`], so validation and
//! apply logic can be exercised against [`MemoryStore`] without touching
//! disk. [`super::YamlStore`] is the file-backed implementation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{LintPrefsError, Result};

/// A persisted option value.
///
/// Hand-edited files may leave a text option blank or write a bare number
/// (`flake8/extendIgnore: 1`); those read back as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "RawValue")]
pub enum ConfigValue {
    /// Boolean toggle.
    Bool(bool),
    /// Free-form text.
    Text(String),
}

/// Any scalar a settings file may hold.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl From<RawValue> for ConfigValue {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Bool(b) => Self::Bool(b),
            RawValue::Int(n) => Self::Text(n.to_string()),
            RawValue::Float(x) => Self::Text(x.to_string()),
            RawValue::Text(s) => Self::Text(s),
            RawValue::Null => Self::Text(String::new()),
        }
    }
}

impl ConfigValue {
    /// Get as bool if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// Get as str if this is a Text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Section-scoped key-value configuration store.
pub trait ConfigStore {
    /// Read an option, `None` if it was never set.
    fn get(&self, section: &str, key: &str) -> Option<ConfigValue>;

    /// Write an option.
    fn set(&mut self, section: &str, key: &str, value: ConfigValue) -> Result<()>;

    /// Persist pending writes.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Read a text option.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the stored value is not text.
    fn get_text(&self, section: &str, key: &str) -> Result<Option<String>> {
        let Some(value) = self.get(section, key) else {
            return Ok(None);
        };
        value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| LintPrefsError::TypeMismatch {
                section: section.to_string(),
                key: key.to_string(),
                expected: "string",
            })
    }

    /// Read a boolean option.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the stored value is not a boolean.
    fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>> {
        let Some(value) = self.get(section, key) else {
            return Ok(None);
        };
        value
            .as_bool()
            .map(Some)
            .ok_or_else(|| LintPrefsError::TypeMismatch {
                section: section.to_string(),
                key: key.to_string(),
                expected: "boolean",
            })
    }
}

/// Sections mapped to their options, ordered for stable output.
pub type Sections = BTreeMap<String, BTreeMap<String, ConfigValue>>;

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    sections: Sections,
    writes: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used to seed fixtures.
    pub fn with(mut self, section: &str, key: &str, value: impl Into<ConfigValue>) -> Self {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        self
    }

    /// Number of `set` calls made so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// All stored sections.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, section: &str, key: &str) -> Option<ConfigValue> {
        self.sections.get(section)?.get(key).cloned()
    }

    fn set(&mut self, section: &str, key: &str, value: ConfigValue) -> Result<()> {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }
}
