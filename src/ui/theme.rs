//! Styles for terminal output.

use console::Style;

/// Styles for the status lines printed by [`super::TerminalUI`].
#[derive(Debug, Clone)]
pub struct PrefsTheme {
    success: Style,
    warning: Style,
    error: Style,
    header: Style,
}

impl PrefsTheme {
    /// Colored styles.
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().bold().underlined(),
        }
    }

    /// Unstyled output, for pipes and `--no-color`.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    /// Pick colored or plain styles for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// `✓ msg`
    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(format!("✓ {}", msg)).to_string()
    }

    /// `⚠ msg`
    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("⚠ {}", msg)).to_string()
    }

    /// `✗ msg`
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }

    /// Section heading, e.g. `Linting`.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }
}

/// Colors are off under `NO_COLOR` (set by `--no-color`) or when stdout
/// is not a terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
