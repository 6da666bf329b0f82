//! Error types for lintprefs operations.
//!
//! This module defines [`LintPrefsError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LintPrefsError` for domain-specific errors that need distinct handling
//! - Pattern problems are carried as [`ValidationError`] so callers can tell
//!   which filter field failed
//! - Use `anyhow::Error` (via `LintPrefsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

pub use crate::config::validator::ValidationError;

/// Core error type for lintprefs operations.
#[derive(Debug, Error)]
pub enum LintPrefsError {
    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to serialize or write the settings file.
    #[error("Failed to write settings at {path}: {message}")]
    ConfigWriteError { path: PathBuf, message: String },

    /// Persisted provider is not one of the known spellings.
    #[error("Unknown linting provider: {value}")]
    UnknownProvider { value: String },

    /// A stored value has the wrong type for its key.
    #[error("Option '{section}/{key}' should be a {expected}")]
    TypeMismatch {
        section: String,
        key: String,
        expected: &'static str,
    },

    /// Filter patterns did not pass validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for lintprefs operations.
pub type Result<T> = std::result::Result<T, LintPrefsError>;
