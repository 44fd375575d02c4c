//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{ChainbootError, Result};

use super::{Prompt, PromptType};

/// Convert dialoguer errors to ChainbootError.
fn map_dialoguer_err(e: dialoguer::Error) -> ChainbootError {
    ChainbootError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Question text as displayed, with the accepted answers for confirms.
pub fn render_question(prompt: &Prompt) -> String {
    match prompt.prompt_type {
        PromptType::Confirm => format!("{} (yes/no)", prompt.question),
        PromptType::Input => prompt.question.clone(),
    }
}

/// Prompt the user for a line of input.
///
/// Confirms are read as typed words rather than single keypresses so that a
/// typo can be rejected and re-asked. Pressing enter returns the default.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(render_question(prompt))
        .allow_empty(true);

    if let Some(default) = &prompt.default {
        input = input.default(default.clone()).show_default(true);
    }

    input.interact_text_on(term).map_err(map_dialoguer_err)
}
