//! lintprefs - Linting provider preferences.
//!
//! Stores which Python linting provider is active (Pyflakes, Flake8, or
//! none) along with the Flake8 filter options, and refuses to save filter
//! patterns that are not valid regular expressions.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings schema, persistence, and pattern validation
//! - [`error`] - Error types and result aliases
//! - [`panel`] - Editing session with option groups and apply semantics
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use lintprefs::config::{FilterField, LintConfigValidator, Provider};
//!
//! let mut validator = LintConfigValidator::new();
//! validator.set_provider(Provider::Extended);
//! validator.set_filter(FilterField::Excludes, r"(?!test_).*\.py, build/");
//! assert!(validator.validate().is_ok());
//!
//! validator.set_filter(FilterField::Filenames, "[");
//! assert!(validator.validate().is_err());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod panel;
pub mod ui;

pub use error::{LintPrefsError, Result};
