//! Set command implementation.
//!
//! The `lintprefs set` command edits options from flags and applies them.
//! Invalid filter patterns abort the whole change.

use std::path::{Path, PathBuf};

use crate::cli::args::SetArgs;
use crate::config::{FilterField, YamlStore};
use crate::error::Result;
use crate::panel::{ApplyOutcome, LintingPanel};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_settings;

/// The set command implementation.
pub struct SetCommand {
    settings_path: PathBuf,
    args: SetArgs,
}

impl SetCommand {
    /// Create a new set command.
    pub fn new(settings_path: &Path, args: SetArgs) -> Self {
        Self {
            settings_path: settings_path.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SetArgs {
        &self.args
    }

    /// Copy the given flags onto the panel.
    fn apply_edits(&self, panel: &mut LintingPanel) {
        if let Some(provider) = self.args.provider {
            panel.set_provider(provider);
        }

        let filters = [
            (FilterField::Filenames, &self.args.filename),
            (FilterField::Excludes, &self.args.exclude),
            (FilterField::Select, &self.args.select),
            (FilterField::Ignore, &self.args.ignore),
        ];
        for (field, value) in filters {
            if let Some(raw) = value {
                panel.set_filter(field, raw.as_str());
            }
        }

        if let Some(underline) = self.args.underline_errors {
            panel.set_underline_errors(underline);
        }
    }
}

impl Command for SetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = YamlStore::open(&self.settings_path)?;
        let mut panel = LintingPanel::open(&store)?;

        self.apply_edits(&mut panel);

        match panel.apply_with_ui(&mut store, ui)? {
            ApplyOutcome::Unchanged => {
                ui.message("Settings already up to date");
                Ok(CommandResult::success())
            }
            ApplyOutcome::Applied { written } => {
                ui.success(&format!("Saved {} option(s)", written.len()));
                if ui.output_mode().shows_details() {
                    show_settings(ui, &panel);
                }
                Ok(CommandResult::success())
            }
            ApplyOutcome::Rejected(_) => Ok(CommandResult::failure(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigStore, Provider, EDITOR_SECTION, LSP_SECTION, PROVIDER_KEY};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn settings_path() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yml");
        (temp, path)
    }

    #[test]
    fn set_writes_changed_options() {
        let (_temp, path) = settings_path();
        let args = SetArgs {
            provider: Some(Provider::Extended),
            filename: Some(r"test_.*\.py".to_string()),
            exclude: Some(r"(?!test_).*\.py".to_string()),
            underline_errors: Some(true),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = SetCommand::new(&path, args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Saved 4 option(s)"));

        let store = YamlStore::open(&path).unwrap();
        assert_eq!(
            store.get_text(LSP_SECTION, PROVIDER_KEY).unwrap(),
            Some("flake8".to_string())
        );
        assert_eq!(
            store.get_text(LSP_SECTION, "flake8/exclude").unwrap(),
            Some(r"(?!test_).*\.py".to_string())
        );
        assert_eq!(
            store.get_bool(EDITOR_SECTION, "underline_errors").unwrap(),
            Some(true)
        );
    }

    #[test]
    fn set_rejects_invalid_filename_pattern() {
        let (_temp, path) = settings_path();
        let args = SetArgs {
            provider: Some(Provider::Extended),
            filename: Some(r"test_.*\.py, [".to_string()),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = SetCommand::new(&path, args).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("File patterns listed for inclusion"));
        assert!(!path.exists());
    }

    #[test]
    fn set_rejects_invalid_exclude_pattern() {
        let (_temp, path) = settings_path();
        fs::write(&path, "lsp:\n  linting_provider: flake8\n").unwrap();
        let args = SetArgs {
            exclude: Some("(".to_string()),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = SetCommand::new(&path, args).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.has_error("Directory patterns listed for exclusion"));
        let store = YamlStore::open(&path).unwrap();
        assert!(store.get(LSP_SECTION, "flake8/exclude").is_none());
    }

    #[test]
    fn set_accepts_anything_for_inactive_provider() {
        let (_temp, path) = settings_path();
        let args = SetArgs {
            provider: Some(Provider::Basic),
            filename: Some("[".to_string()),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = SetCommand::new(&path, args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn set_without_changes_reports_up_to_date() {
        let (_temp, path) = settings_path();
        let mut ui = MockUI::new();

        let result = SetCommand::new(&path, SetArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("already up to date"));
        assert!(!path.exists());
    }
}
