//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use lintprefs::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("provider", "flake8");
//!
//! // Use ui in code under test...
//! ui.error("File patterns listed for inclusion should be valid regular expressions: [");
//!
//! // Assert on captured interactions
//! assert!(ui.has_error("File patterns"));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{parse_yes, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Mock UI implementation for testing.
///
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys asked more than once.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    fn respond(prompt: &Prompt, response: &str) -> PromptResult {
        if matches!(prompt.prompt_type, PromptType::Confirm) {
            PromptResult::Bool(parse_yes(response))
        } else {
            PromptResult::String(response.to_string())
        }
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        // Check queued responses first (for keys asked multiple times)
        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return Ok(Self::respond(prompt, &response));
            }
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(Self::respond(prompt, response));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::respond(prompt, default));
        }

        // Return type-appropriate empty for last resort
        Ok(Self::respond(prompt, ""))
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_output() {
        let mut ui = MockUI::new();
        ui.message("msg");
        ui.success("ok");
        ui.warning("careful");
        ui.error("bad");
        ui.show_header("Linting");

        assert!(ui.has_message("msg"));
        assert!(ui.has_success("ok"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("bad"));
        assert_eq!(ui.headers(), &["Linting".to_string()]);
    }

    #[test]
    fn queued_responses_come_first() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("flake8/exclude", "final");
        ui.queue_prompt_responses("flake8/exclude", vec!["(", "build"]);
        let prompt = Prompt::new("flake8/exclude", "Exclude", PromptType::Input);

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "(");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "build");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "final");
        assert_eq!(ui.prompts_shown().len(), 3);
    }

    #[test]
    fn falls_back_to_default() {
        let mut ui = MockUI::new();
        let prompt = Prompt::new("save", "Save?", PromptType::Confirm).with_default("yes");
        assert!(ui.prompt(&prompt).unwrap().as_bool());
    }

    #[test]
    fn last_resort_is_empty() {
        let mut ui = MockUI::new();
        let confirm = Prompt::new("save", "Save?", PromptType::Confirm);
        let input = Prompt::new("text", "Text", PromptType::Input);
        assert!(!ui.prompt(&confirm).unwrap().as_bool());
        assert_eq!(ui.prompt(&input).unwrap().as_string(), "");
    }

    #[test]
    fn interactive_flag() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
