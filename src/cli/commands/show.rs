//! Show command implementation.
//!
//! The `lintprefs show` command prints the saved linting settings.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::cli::args::ShowArgs;
use crate::config::{LintingSettings, YamlStore};
use crate::error::{LintPrefsError, Result};
use crate::panel::{GroupId, LintingPanel};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_settings;

/// JSON shape of `show --json`.
#[derive(Debug, Serialize)]
struct ShowReport<'a> {
    path: &'a Path,
    #[serde(flatten)]
    settings: LintingSettings,
    visible_groups: BTreeSet<GroupId>,
}

/// The show command implementation.
pub struct ShowCommand {
    settings_path: PathBuf,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(settings_path: &Path, args: ShowArgs) -> Self {
        Self {
            settings_path: settings_path.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ShowArgs {
        &self.args
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = YamlStore::open(&self.settings_path)?;
        let panel = LintingPanel::open(&store)?;

        if self.args.json {
            let report = ShowReport {
                path: &self.settings_path,
                settings: panel.settings(),
                visible_groups: panel.visible_groups(),
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| LintPrefsError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if ui.output_mode().shows_details() {
            ui.message(&format!("# {}", self.settings_path.display()));
        }
        show_settings(ui, &panel);

        Ok(CommandResult::success())
    }
}
