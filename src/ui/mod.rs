//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//! - [`ask`] helpers that re-ask until an answer parses
//!
//! Every prompt returns the operator's raw answer. Interpreting it (and
//! re-asking when it makes no sense) is the job of [`ask::ask_until_valid`].
//!
//! # Example
//!
//! ```
//! use chainboot::ui::{ask, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("install", vec!["maybe", "YES"]);
//!
//! let answer = ask::confirm(&mut ui, "install", "Install the toolchain?", true).unwrap();
//! assert!(answer);
//! assert_eq!(ui.prompts_shown().len(), 2);
//! ```

pub mod ask;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use ask::{ask_until_valid, confirm, parse_yes_no, AnswerError};
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ChainbootTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a command line that is about to run (verbose mode only).
    fn command(&mut self, cmd: &str);

    /// Show a prompt and return the raw answer.
    ///
    /// An empty answer means the operator just pressed enter.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Mark as skipped.
    fn finish_skipped(&mut self, msg: &str);
}

/// A prompt to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Unique key for the prompt (used for env overrides and test lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Answer used when the user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// A yes/no question.
    pub fn confirm(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: Some(if default { "yes" } else { "no" }.to_string()),
        }
    }

    /// A free-form text question.
    pub fn input(key: &str, question: &str, default: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: default.map(String::from),
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Yes/no question answered with a typed word.
    Confirm,
    /// Free-form text input.
    Input,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_prompt_stores_default_as_word() {
        let yes = Prompt::confirm("install", "Install?", true);
        let no = Prompt::confirm("cleanup", "Remove?", false);

        assert_eq!(yes.prompt_type, PromptType::Confirm);
        assert_eq!(yes.default.as_deref(), Some("yes"));
        assert_eq!(no.default.as_deref(), Some("no"));
    }

    #[test]
    fn input_prompt_keeps_optional_default() {
        let with = Prompt::input("manifest", "Manifest path", Some("Cargo.toml"));
        let without = Prompt::input("note", "Note", None);

        assert_eq!(with.prompt_type, PromptType::Input);
        assert_eq!(with.default.as_deref(), Some("Cargo.toml"));
        assert_eq!(without.default, None);
    }
}
