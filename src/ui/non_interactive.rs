//! Non-interactive UI for CI/headless environments.
//!
//! Prompts are answered from `CHAINBOOT_PROMPT_<KEY>` environment variables,
//! falling back to the prompt's default.

use std::collections::HashMap;

use super::theme::ChainbootTheme;
use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};
use crate::error::Result;

/// Prefix of the environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "CHAINBOOT_PROMPT_";

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    theme: ChainbootTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading overrides from the process env.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            theme: ChainbootTheme::plain(),
        }
    }

    /// Name of the env var that answers the prompt with `key`.
    pub fn env_key(key: &str) -> String {
        format!("{}{}", PROMPT_ENV_PREFIX, key.to_uppercase())
    }

    fn answer_for(&self, prompt: &Prompt) -> (String, &'static str) {
        if let Some(value) = self.env_overrides.get(&Self::env_key(&prompt.key)) {
            return (value.clone(), "environment");
        }
        match &prompt.default {
            Some(default) => (default.clone(), "default"),
            None => (String::new(), "empty"),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn command(&mut self, cmd: &str) {
        if self.mode.shows_commands() {
            println!("{}", self.theme.format_command(cmd));
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let (answer, source) = self.answer_for(prompt);
        tracing::debug!(key = %prompt.key, %source, "answering prompt");
        if self.mode.shows_status() {
            println!("{}: {} ({})", prompt.question, answer, source);
        }
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(LineSpinner {
            visible: self.mode.shows_status(),
            theme: self.theme.clone(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", self.theme.format_header(title));
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints the final state as a line.
struct LineSpinner {
    visible: bool,
    theme: ChainbootTheme,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.visible {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.visible {
            println!("{}", self.theme.format_skipped(msg));
        }
    }
}
