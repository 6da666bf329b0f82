//! Edit command implementation.
//!
//! The `lintprefs edit` command walks through the options with prompts,
//! showing only the groups that apply to the chosen provider. When the
//! filter patterns are rejected the user is asked to edit again, with the
//! previous answers kept as defaults. Without a terminal the answers come
//! from fixed overrides, so a rejection ends the command.

use std::path::{Path, PathBuf};

use crate::cli::args::EditArgs;
use crate::config::{FilterField, Provider, YamlStore};
use crate::error::Result;
use crate::panel::{ApplyOutcome, GroupId, LintingPanel};
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::yes_no;

/// Prompt key for the provider selection.
pub const PROVIDER_PROMPT: &str = "provider";

/// Prompt key for the underline toggle.
pub const UNDERLINE_PROMPT: &str = "underline_errors";

/// Prompt key asked after a rejected apply.
pub const RETRY_PROMPT: &str = "edit_again";

/// The edit command implementation.
pub struct EditCommand {
    settings_path: PathBuf,
    args: EditArgs,
}

impl EditCommand {
    /// Create a new edit command.
    pub fn new(settings_path: &Path, args: EditArgs) -> Self {
        Self {
            settings_path: settings_path.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &EditArgs {
        &self.args
    }

    fn prompt_provider(&self, panel: &mut LintingPanel, ui: &mut dyn UserInterface) -> Result<()> {
        let options = Provider::ALL
            .iter()
            .map(|p| PromptOption {
                label: p.label().to_string(),
                value: p.key().to_string(),
            })
            .collect();

        let prompt = Prompt::new(
            PROVIDER_PROMPT,
            "Linting provider",
            PromptType::Select { options },
        )
        .with_default(panel.provider().key());

        let provider: Provider = ui.prompt(&prompt)?.as_string().parse()?;
        panel.set_provider(provider);
        Ok(())
    }

    fn prompt_filters(&self, panel: &mut LintingPanel, ui: &mut dyn UserInterface) -> Result<()> {
        for field in FilterField::ALL {
            let current = panel.filter(field);
            let question = if current.trim().is_empty() {
                format!("{} ({})", field.label(), field.placeholder())
            } else {
                field.label().to_string()
            };

            let prompt =
                Prompt::new(field.key(), question, PromptType::Input).with_default(current);
            let raw = ui.prompt(&prompt)?.as_string();
            panel.set_filter(field, raw);
        }
        Ok(())
    }

    fn prompt_underline(&self, panel: &mut LintingPanel, ui: &mut dyn UserInterface) -> Result<()> {
        let prompt = Prompt::new(
            UNDERLINE_PROMPT,
            "Underline errors and warnings",
            PromptType::Confirm,
        )
        .with_default(yes_no(panel.underline_errors()));

        let underline = ui.prompt(&prompt)?.as_bool();
        panel.set_underline_errors(underline);
        Ok(())
    }

    /// One pass over every visible group.
    fn prompt_once(&self, panel: &mut LintingPanel, ui: &mut dyn UserInterface) -> Result<()> {
        self.prompt_provider(panel, ui)?;

        for group in panel.visible_groups() {
            match group {
                GroupId::Flake8Options if !self.args.skip_filters => {
                    self.prompt_filters(panel, ui)?;
                }
                GroupId::PyflakesNotice | GroupId::DisabledNotice => {
                    ui.message(group.label());
                }
                GroupId::AdditionalOptions => {
                    self.prompt_underline(panel, ui)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn ask_retry(&self, ui: &mut dyn UserInterface) -> Result<bool> {
        if !ui.is_interactive() {
            return Ok(false);
        }

        let prompt = Prompt::new(
            RETRY_PROMPT,
            "Edit the settings again?",
            PromptType::Confirm,
        )
        .with_default("yes");
        Ok(ui.prompt(&prompt)?.as_bool())
    }
}

impl Command for EditCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = YamlStore::open(&self.settings_path)?;
        let mut panel = LintingPanel::open(&store)?;

        ui.show_header("Linting");

        loop {
            self.prompt_once(&mut panel, ui)?;

            match panel.apply_with_ui(&mut store, ui)? {
                ApplyOutcome::Unchanged => {
                    ui.message("No changes");
                    return Ok(CommandResult::success());
                }
                ApplyOutcome::Applied { written } => {
                    ui.success(&format!("Saved {} option(s)", written.len()));
                    return Ok(CommandResult::success());
                }
                ApplyOutcome::Rejected(_) => {
                    if !self.ask_retry(ui)? {
                        ui.warning("Settings were not saved");
                        return Ok(CommandResult::failure(1));
                    }
                }
            }
        }
    }
}
