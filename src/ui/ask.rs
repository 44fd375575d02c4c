//! Ask-until-valid prompt loop.
//!
//! A prompt is re-issued until its raw answer parses. Unrecognized input
//! never falls back to the default: only an empty answer does.

use thiserror::Error;

use crate::error::{ChainbootError, Result};

use super::{Prompt, UserInterface};

/// Why a raw answer was rejected. Shown to the operator before re-asking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct AnswerError(pub String);

/// Show `prompt` until `parse` accepts the answer.
///
/// In non-interactive mode a rejected answer cannot be corrected, so it
/// becomes [`ChainbootError::InvalidAnswer`] instead of looping forever.
pub fn ask_until_valid<T, F>(ui: &mut dyn UserInterface, prompt: &Prompt, parse: F) -> Result<T>
where
    F: Fn(&str) -> std::result::Result<T, AnswerError>,
{
    loop {
        let raw = ui.prompt(prompt)?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(err) if ui.is_interactive() => {
                tracing::debug!(key = %prompt.key, answer = %raw, "re-asking");
                ui.warning(&err.to_string());
            }
            Err(err) => {
                return Err(ChainbootError::InvalidAnswer {
                    key: prompt.key.clone(),
                    message: err.to_string(),
                })
            }
        }
    }
}

/// Interpret a yes/no answer.
///
/// Accepts `yes`, `y`, `no` and `n` in any case, surrounding whitespace
/// ignored. An empty answer yields `default`.
pub fn parse_yes_no(raw: &str, default: bool) -> std::result::Result<bool, AnswerError> {
    let answer = raw.trim().to_lowercase();
    match answer.as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(AnswerError(format!(
            "Please answer yes or no (got '{}')",
            raw.trim()
        ))),
    }
}

/// Ask a yes/no question until it gets a recognized answer.
pub fn confirm(ui: &mut dyn UserInterface, key: &str, question: &str, default: bool) -> Result<bool> {
    let prompt = Prompt::confirm(key, question, default);
    ask_until_valid(ui, &prompt, |raw| parse_yes_no(raw, default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn yes_no_accepts_all_spellings() {
        for raw in ["y", "Y", "yes", "YES", "Yes", "  yes  "] {
            assert_eq!(parse_yes_no(raw, false), Ok(true), "{raw}");
        }
        for raw in ["n", "N", "no", "NO", "nO"] {
            assert_eq!(parse_yes_no(raw, true), Ok(false), "{raw}");
        }
    }

    #[test]
    fn yes_no_empty_uses_default() {
        assert_eq!(parse_yes_no("", true), Ok(true));
        assert_eq!(parse_yes_no("   ", false), Ok(false));
    }

    #[test]
    fn yes_no_rejects_anything_else() {
        for raw in ["yep", "nope", "1", "true", "ye", "yes please"] {
            assert!(parse_yes_no(raw, true).is_err(), "{raw}");
        }
    }

    #[test]
    fn confirm_reasks_until_recognized() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("install", vec!["sure", "yse", "n"]);

        let answer = confirm(&mut ui, "install", "Install?", true).unwrap();

        assert!(!answer);
        assert_eq!(ui.prompts_shown(), ["install", "install", "install"]);
        assert_eq!(ui.warnings().len(), 2);
        assert!(ui.has_warning("Please answer yes or no"));
    }

    #[test]
    fn confirm_empty_answer_takes_default() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("cleanup", "");

        assert!(confirm(&mut ui, "cleanup", "Remove?", true).unwrap());
        assert!(!confirm(&mut ui, "cleanup", "Remove?", false).unwrap());
    }

    #[test]
    fn non_interactive_rejection_is_an_error() {
        let mut ui = MockUI::new();
        ui.set_interactive(false);
        ui.set_prompt_response("install", "whatever");

        let err = confirm(&mut ui, "install", "Install?", true).unwrap_err();

        assert!(matches!(err, ChainbootError::InvalidAnswer { ref key, .. } if key == "install"));
        assert_eq!(ui.prompts_shown().len(), 1);
    }

    #[test]
    fn ask_until_valid_is_independent_of_prompt_text() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("count", vec!["three", "3"]);
        let prompt = Prompt::input("count", "How many?", None);

        let n: u32 = ask_until_valid(&mut ui, &prompt, |raw| {
            raw.trim()
                .parse()
                .map_err(|_| AnswerError("not a number".into()))
        })
        .unwrap();

        assert_eq!(n, 3);
        assert!(ui.has_warning("not a number"));
    }
}
