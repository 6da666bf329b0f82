//! Interactive terminal UI.
//!
//! Results and status go to stdout; warnings and errors go to stderr so
//! `show --json` stays parseable.

use console::Term;

use crate::error::Result;

use super::{
    prompt_user, NonInteractiveUI, OutputMode, PrefsTheme, Prompt, PromptResult, UserInterface,
};

/// UI for a user sitting at a terminal.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PrefsTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI with styles picked for the current terminal.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_theme(mode, PrefsTheme::detect())
    }

    /// Create a terminal UI with explicit styles.
    pub fn with_theme(mode: OutputMode, theme: PrefsTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.out.write_line(msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.out.write_line(&self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.err.write_line(&self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        self.err.write_line(&self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.out)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.out.write_line(&self.theme.format_header(title)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}

/// Terminal prompts when asked for and stdout is a terminal, otherwise
/// prompts answered from `LINTPREFS_PROMPT_*` variables and defaults.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_tracks_output_mode() {
        let mut ui = TerminalUI::with_theme(OutputMode::Quiet, PrefsTheme::plain());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        ui.set_output_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn create_ui_without_interaction_is_headless() {
        let ui = create_ui(false, OutputMode::Quiet);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
