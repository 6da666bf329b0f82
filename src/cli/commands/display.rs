//! Shared display helpers for linting settings.
//!
//! Used by `show`, `set`, and `edit` so the settings render the same way
//! everywhere. Only the option groups visible for the provider are listed.

use crate::config::FilterField;
use crate::panel::{GroupId, LintingPanel};
use crate::ui::UserInterface;

/// Text shown for a filter field with no entries.
const EMPTY_FIELD: &str = "(none)";

/// Render a yes/no toggle.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Lines describing the panel, in display order.
pub fn settings_lines(panel: &LintingPanel) -> Vec<String> {
    let provider = panel.provider();
    let mut lines = vec![format!("Provider: {} ({})", provider.label(), provider.key())];

    for group in panel.visible_groups() {
        match group {
            GroupId::Flake8Options => {
                for field in FilterField::ALL {
                    let raw = panel.filter(field).trim();
                    let shown = if raw.is_empty() { EMPTY_FIELD } else { raw };
                    lines.push(format!("  {}: {}", field.label(), shown));
                }
            }
            GroupId::PyflakesNotice | GroupId::DisabledNotice => {
                lines.push(format!("  {}", group.label()));
            }
            GroupId::AdditionalOptions => {
                lines.push(format!(
                    "Underline errors and warnings: {}",
                    yes_no(panel.underline_errors())
                ));
            }
            GroupId::ProviderSelect => {}
        }
    }

    lines
}

/// Print the panel through the UI.
pub fn show_settings(ui: &mut dyn UserInterface, panel: &LintingPanel) {
    for line in settings_lines(panel) {
        ui.message(&line);
    }
}
