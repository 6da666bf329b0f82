//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::Provider;

/// lintprefs - Linting provider preferences.
#[derive(Debug, Parser)]
#[command(name = "lintprefs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides the default location)
    #[arg(short, long, global = true, env = "LINTPREFS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show current linting settings (default if no command specified)
    Show(ShowArgs),

    /// Change linting settings
    Set(SetArgs),

    /// Check that saved filter patterns are valid
    Validate(ValidateArgs),

    /// Edit linting settings interactively
    Edit(EditArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetArgs {
    /// Linting provider: pyflakes, flake8, no_linting
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<Provider>,

    /// Only check these filenames (comma-separated regular expressions)
    #[arg(long, value_name = "PATTERNS", allow_hyphen_values = true)]
    pub filename: Option<String>,

    /// Exclude these files or directories (comma-separated regular expressions)
    #[arg(long, value_name = "PATTERNS", allow_hyphen_values = true)]
    pub exclude: Option<String>,

    /// Show these errors or warnings (comma-separated codes)
    #[arg(long, value_name = "CODES")]
    pub select: Option<String>,

    /// Ignore these errors or warnings (comma-separated codes)
    #[arg(long, value_name = "CODES")]
    pub ignore: Option<String>,

    /// Underline errors and warnings in the editor
    #[arg(long, value_name = "BOOL")]
    pub underline_errors: Option<bool>,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Validate as if this provider were selected
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<Provider>,
}

/// Arguments for the `edit` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EditArgs {
    /// Only edit the provider and display options
    #[arg(long)]
    pub skip_filters: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
