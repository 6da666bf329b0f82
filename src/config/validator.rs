//! Filter pattern validation.
//!
//! [`LintConfigValidator`] holds the provider selection and the raw text
//! of the four filter fields. Nothing is parsed while the user edits;
//! [`LintConfigValidator::validate`] is the single pass run when settings
//! are applied:
//! - Only the flake8 provider has active filter fields
//! - Filenames are checked before excludes, first failure wins
//! - Code lists (select/ignore) are never compiled
//! - Entries are compiled as Python `re` patterns (see [`super::pattern`])

use thiserror::Error;
use tracing::debug;

use super::pattern;
use crate::config::schema::{FilterField, FilterSet, LintingSettings, Provider};

/// Which pattern list failed to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// The filename-match field.
    Filenames,
    /// The exclude field.
    Excludes,
}

impl PatternKind {
    /// The kind checked for a field, `None` for code lists.
    pub fn from_field(field: FilterField) -> Option<Self> {
        match field {
            FilterField::Filenames => Some(PatternKind::Filenames),
            FilterField::Excludes => Some(PatternKind::Excludes),
            FilterField::Select | FilterField::Ignore => None,
        }
    }

    /// Message shown to the user when this list is invalid.
    pub fn message(&self) -> &'static str {
        match self {
            PatternKind::Filenames => {
                "File patterns listed for inclusion should be valid regular expressions"
            }
            PatternKind::Excludes => {
                "Directory patterns listed for exclusion should be valid regular expressions"
            }
        }
    }

    /// The filter field this kind reports on.
    pub fn field(&self) -> FilterField {
        match self {
            PatternKind::Filenames => FilterField::Filenames,
            PatternKind::Excludes => FilterField::Excludes,
        }
    }
}

/// Error raised by the validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A trimmed, non-empty segment is not a valid regular expression.
    #[error("{}: {pattern}", .kind.message())]
    InvalidPattern { kind: PatternKind, pattern: String },
}

impl ValidationError {
    /// The pattern list that failed.
    pub fn kind(&self) -> PatternKind {
        match self {
            ValidationError::InvalidPattern { kind, .. } => *kind,
        }
    }
}

/// Split comma-separated text into trimmed, non-empty segments.
///
/// ```
/// use lintprefs::config::split_patterns;
///
/// assert_eq!(split_patterns(r"test_.*\.py, , conf.py"), vec![r"test_.*\.py", "conf.py"]);
/// assert!(split_patterns("  ").is_empty());
/// ```
pub fn split_patterns(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Compile every segment of `raw`, returning the first one that fails.
fn first_invalid(raw: &str) -> Option<&str> {
    split_patterns(raw)
        .into_iter()
        .find(|segment| !pattern::compiles(segment))
}

/// Provider selection plus raw filter text, validated on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintConfigValidator {
    provider: Provider,
    filters: FilterSet,
}

impl LintConfigValidator {
    /// Create a validator with the default provider and empty filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a validator from persisted settings.
    pub fn from_settings(settings: &LintingSettings) -> Self {
        Self {
            provider: settings.provider,
            filters: settings.filters.clone(),
        }
    }

    /// Select a provider. Never validates.
    pub fn set_provider(&mut self, provider: Provider) {
        self.provider = provider;
    }

    /// Store raw comma-separated text for a field verbatim.
    pub fn set_filter(&mut self, field: FilterField, raw: impl Into<String>) {
        self.filters.set(field, raw);
    }

    /// Currently selected provider.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Raw text of a field as the user typed it.
    pub fn filter(&self, field: FilterField) -> &str {
        self.filters.get(field)
    }

    /// All four raw fields.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Trimmed, non-empty entries of a field.
    pub fn patterns(&self, field: FilterField) -> Vec<&str> {
        split_patterns(self.filters.get(field))
    }

    /// Run the validation pass.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` naming the first list (filenames, then
    /// excludes) holding an entry that does not compile.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.provider.is_configurable() {
            debug!(provider = %self.provider, "Filter fields inactive, skipping validation");
            return Ok(());
        }

        for field in FilterField::ALL {
            let Some(kind) = PatternKind::from_field(field) else {
                continue;
            };
            if let Some(pattern) = first_invalid(self.filters.get(field)) {
                debug!(%field, pattern, "Invalid filter pattern");
                return Err(ValidationError::InvalidPattern {
                    kind,
                    pattern: pattern.to_string(),
                });
            }
        }

        Ok(())
    }
}
