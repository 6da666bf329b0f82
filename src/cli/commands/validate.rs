//! Validate command implementation.
//!
//! The `lintprefs validate` command runs the validation pass on the saved
//! settings without changing them.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::config::{load_settings, LintConfigValidator, YamlStore};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    settings_path: PathBuf,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(settings_path: &Path, args: ValidateArgs) -> Self {
        Self {
            settings_path: settings_path.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ValidateArgs {
        &self.args
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = YamlStore::open(&self.settings_path)?;
        let settings = load_settings(&store)?;

        let mut validator = LintConfigValidator::from_settings(&settings);
        if let Some(provider) = self.args.provider {
            validator.set_provider(provider);
        }

        match validator.validate() {
            Ok(()) => {
                ui.success("Linting settings are valid");
                Ok(CommandResult::success())
            }
            Err(err) => {
                ui.error(&err.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provider;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_settings(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yml");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn valid_settings_succeed() {
        let (_temp, path) = setup_settings(
            "lsp:\n  linting_provider: flake8\n  flake8/exclude: '(?!test_).*\\.py'\n",
        );
        let mut ui = MockUI::new();

        let result = ValidateCommand::new(&path, ValidateArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("valid"));
    }

    #[test]
    fn invalid_excludes_fail() {
        let (_temp, path) =
            setup_settings("lsp:\n  linting_provider: flake8\n  flake8/exclude: '('\n");
        let mut ui = MockUI::new();

        let result = ValidateCommand::new(&path, ValidateArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Directory patterns listed for exclusion"));
    }

    #[test]
    fn inactive_provider_skips_patterns() {
        let (_temp, path) =
            setup_settings("lsp:\n  linting_provider: pyflakes\n  flake8/filename: '['\n");
        let mut ui = MockUI::new();

        let result = ValidateCommand::new(&path, ValidateArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
    }

    #[test]
    fn provider_override_checks_flake8_filters() {
        let (_temp, path) =
            setup_settings("lsp:\n  linting_provider: pyflakes\n  flake8/filename: '['\n");
        let mut ui = MockUI::new();
        let args = ValidateArgs {
            provider: Some(Provider::Extended),
        };

        let result = ValidateCommand::new(&path, args).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.has_error("File patterns listed for inclusion"));
    }
}
