//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ShowArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given settings file.
    pub fn new(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    /// Get the settings file path.
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(&self.settings_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Set(args)) => {
                let cmd = super::set::SetCommand::new(&self.settings_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Validate(args)) => {
                let cmd = super::validate::ValidateCommand::new(&self.settings_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Edit(args)) => {
                let cmd = super::edit::EditCommand::new(&self.settings_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to show with default args
                let cmd = super::show::ShowCommand::new(&self.settings_path, ShowArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
