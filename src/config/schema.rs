//! Linting settings schema.
//!
//! This module contains the types that map to persisted linting options:
//! the provider selection, the four flake8 filter fields, and the
//! full [`LintingSettings`] snapshot read from and written to a store.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LintPrefsError;

/// Section holding the provider and filter options.
pub const LSP_SECTION: &str = "lsp";

/// Section holding editor display options.
pub const EDITOR_SECTION: &str = "editor";

/// Key of the persisted provider selection.
pub const PROVIDER_KEY: &str = "linting_provider";

/// Key of the underline toggle.
pub const UNDERLINE_ERRORS_KEY: &str = "underline_errors";

/// Selected linting backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Provider {
    /// Linting disabled.
    #[serde(rename = "no_linting")]
    None,
    /// Pyflakes, no options.
    #[default]
    #[serde(rename = "pyflakes")]
    Basic,
    /// Flake8, configurable through the filter fields.
    #[serde(rename = "flake8")]
    Extended,
}

impl Provider {
    /// All providers in display order.
    pub const ALL: [Provider; 3] = [Provider::Basic, Provider::Extended, Provider::None];

    /// The persisted spelling.
    pub fn key(&self) -> &'static str {
        match self {
            Provider::None => "no_linting",
            Provider::Basic => "pyflakes",
            Provider::Extended => "flake8",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::None => "Disable linting",
            Provider::Basic => "Pyflakes (Basic)",
            Provider::Extended => "Flake8 (Intermediate)",
        }
    }

    /// Whether the filter fields apply to this provider.
    pub fn is_configurable(&self) -> bool {
        matches!(self, Provider::Extended)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Provider {
    type Err = LintPrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "no_linting" => Ok(Provider::None),
            "pyflakes" => Ok(Provider::Basic),
            "flake8" => Ok(Provider::Extended),
            other => Err(LintPrefsError::UnknownProvider {
                value: other.to_string(),
            }),
        }
    }
}

/// One of the four flake8 filter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    /// Only check these filenames.
    Filenames,
    /// Exclude these files or directories.
    Excludes,
    /// Show these errors or warnings.
    Select,
    /// Ignore these errors or warnings.
    Ignore,
}

impl FilterField {
    /// All fields in the order they are checked and displayed.
    pub const ALL: [FilterField; 4] = [
        FilterField::Filenames,
        FilterField::Excludes,
        FilterField::Select,
        FilterField::Ignore,
    ];

    /// The persisted key within [`LSP_SECTION`].
    pub fn key(&self) -> &'static str {
        match self {
            FilterField::Filenames => "flake8/filename",
            FilterField::Excludes => "flake8/exclude",
            FilterField::Select => "flake8/extendSelect",
            FilterField::Ignore => "flake8/extendIgnore",
        }
    }

    /// Prompt label shown when editing.
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Filenames => "Only check these filenames",
            FilterField::Excludes => "Exclude these files or directories",
            FilterField::Select => "Show these errors or warnings",
            FilterField::Ignore => "Ignore these errors or warnings",
        }
    }

    /// Example value shown next to an empty field.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FilterField::Filenames => r"Check test files: test_.*\.py",
            FilterField::Excludes => r"Exclude test files: (?!test_).*\.py",
            FilterField::Select => "Example codes: E113, W391",
            FilterField::Ignore => "Default is: E,W,C90",
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Raw text of the four filter fields, stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    /// Comma-separated filename-match patterns.
    pub filename: String,
    /// Comma-separated exclusion patterns.
    pub exclude: String,
    /// Comma-separated codes to select.
    pub extend_select: String,
    /// Comma-separated codes to ignore.
    pub extend_ignore: String,
}

impl FilterSet {
    /// Get the raw text of a field.
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Filenames => &self.filename,
            FilterField::Excludes => &self.exclude,
            FilterField::Select => &self.extend_select,
            FilterField::Ignore => &self.extend_ignore,
        }
    }

    /// Replace the raw text of a field.
    pub fn set(&mut self, field: FilterField, raw: impl Into<String>) {
        let slot = match field {
            FilterField::Filenames => &mut self.filename,
            FilterField::Excludes => &mut self.exclude,
            FilterField::Select => &mut self.extend_select,
            FilterField::Ignore => &mut self.extend_ignore,
        };
        *slot = raw.into();
    }
}

/// Complete persisted linting state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintingSettings {
    /// Active backend.
    pub provider: Provider,

    /// Flake8 filter fields.
    pub filters: FilterSet,

    /// Underline errors and warnings in the editor.
    pub underline_errors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parses_persisted_spellings() {
        assert_eq!("pyflakes".parse::<Provider>().unwrap(), Provider::Basic);
        assert_eq!("flake8".parse::<Provider>().unwrap(), Provider::Extended);
        assert_eq!("no_linting".parse::<Provider>().unwrap(), Provider::None);
        assert_eq!(" flake8 ".parse::<Provider>().unwrap(), Provider::Extended);
    }

    #[test]
    fn provider_rejects_unknown_spelling() {
        let err = "pylint".parse::<Provider>().unwrap_err();
        assert!(matches!(err, LintPrefsError::UnknownProvider { value } if value == "pylint"));
    }

    #[test]
    fn provider_display_matches_key() {
        for provider in Provider::ALL {
            assert_eq!(provider.to_string(), provider.key());
            assert_eq!(provider.key().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn provider_default_is_basic() {
        assert_eq!(Provider::default(), Provider::Basic);
    }

    #[test]
    fn only_extended_is_configurable() {
        assert!(Provider::Extended.is_configurable());
        assert!(!Provider::Basic.is_configurable());
        assert!(!Provider::None.is_configurable());
    }

    #[test]
    fn filter_keys_match_flake8_options() {
        assert_eq!(FilterField::Filenames.key(), "flake8/filename");
        assert_eq!(FilterField::Excludes.key(), "flake8/exclude");
        assert_eq!(FilterField::Select.key(), "flake8/extendSelect");
        assert_eq!(FilterField::Ignore.key(), "flake8/extendIgnore");
    }

    #[test]
    fn filter_set_get_and_set() {
        let mut filters = FilterSet::default();
        filters.set(FilterField::Select, "E113, W391");
        assert_eq!(filters.get(FilterField::Select), "E113, W391");
        assert_eq!(filters.get(FilterField::Ignore), "");
    }

    #[test]
    fn settings_serialize_provider_as_key() {
        let settings = LintingSettings {
            provider: Provider::Extended,
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&settings).unwrap();
        assert!(yaml.contains("provider: flake8"));
    }

    #[test]
    fn settings_deserialize_with_missing_fields() {
        let settings: LintingSettings = serde_yaml::from_str("provider: no_linting").unwrap();
        assert_eq!(settings.provider, Provider::None);
        assert_eq!(settings.filters, FilterSet::default());
        assert!(!settings.underline_errors);
    }
}
