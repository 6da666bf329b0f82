//! Linting settings: schema, persistence, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - The key-value store port in [`store`] and its YAML file backend in [`yaml_store`]
//! - Settings file discovery and loading in [`loader`]
//! - Filter pattern validation in [`validator`], using the Python `re`
//!   dialect from [`pattern`]
//!
//! # Example
//!
//! ```
//! use lintprefs::config::{FilterField, LintConfigValidator, PatternKind, Provider};
//!
//! let mut validator = LintConfigValidator::new();
//! validator.set_provider(Provider::Extended);
//! validator.set_filter(FilterField::Filenames, r"test_.*\.py, [");
//!
//! let err = validator.validate().unwrap_err();
//! assert_eq!(err.kind(), PatternKind::Filenames);
//! ```

pub mod loader;
pub mod pattern;
pub mod schema;
pub mod store;
pub mod validator;
pub mod yaml_store;

// Schema re-exports
pub use schema::{
    FilterField, FilterSet, LintingSettings, Provider, EDITOR_SECTION, LSP_SECTION, PROVIDER_KEY,
    UNDERLINE_ERRORS_KEY,
};

// Store re-exports
pub use store::{ConfigStore, ConfigValue, MemoryStore, Sections};
pub use yaml_store::YamlStore;

// Loader re-exports
pub use loader::{load_provider, load_settings, settings_path, SETTINGS_FILE};

// Validator re-exports
pub use validator::{split_patterns, LintConfigValidator, PatternKind, ValidationError};
