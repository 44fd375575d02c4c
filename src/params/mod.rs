//! Run parameter collection.
//!
//! Parameters are declared as an ordered list of [`ParameterSpec`]s and
//! collected in that order. The order matters: positional values later reach
//! the analyzer in the same sequence.
//!
//! # Example
//!
//! ```
//! use chainboot::params::{collect, ParameterSpec, Presets};
//! use chainboot::ui::MockUI;
//!
//! let specs = vec![
//!     ParameterSpec::free_text("manifest", "Manifest path", "Cargo.toml"),
//!     ParameterSpec::flag("mode", "Output the call graph?", "--call", false),
//! ];
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("mode", "yes");
//!
//! let collected = collect(&specs, &Presets::new(), &mut ui).unwrap();
//! assert_eq!(collected[0].value.as_text(), Some("Cargo.toml"));
//! assert_eq!(collected[1].value.flag_token(), Some("--call"));
//! ```

pub mod standard;

pub use standard::{standard_parameters, MANIFEST, MODE, OUTPUT};

use std::collections::HashMap;

use crate::error::{ChainbootError, Result};
use crate::ui::{ask, AnswerError, Prompt, UserInterface};

/// What kind of answer a parameter takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    /// Free-form text, passed through verbatim.
    FreeText { default: String },
    /// Yes/no switch that adds `token` to the arguments when enabled.
    Flag { token: String, default: bool },
}

/// Declaration of one run parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Stable identity, also the prompt key.
    pub name: String,
    /// Question shown to the operator.
    pub prompt: String,
    pub kind: ParameterKind,
}

impl ParameterSpec {
    /// Declare a free-text parameter.
    pub fn free_text(name: &str, prompt: &str, default: &str) -> Self {
        Self {
            name: name.to_string(),
            prompt: prompt.to_string(),
            kind: ParameterKind::FreeText {
                default: default.to_string(),
            },
        }
    }

    /// Declare a flag parameter.
    pub fn flag(name: &str, prompt: &str, token: &str, default: bool) -> Self {
        Self {
            name: name.to_string(),
            prompt: prompt.to_string(),
            kind: ParameterKind::Flag {
                token: token.to_string(),
                default,
            },
        }
    }

    /// The value used when the operator gives no answer.
    pub fn default_value(&self) -> ParameterValue {
        match &self.kind {
            ParameterKind::FreeText { default } => ParameterValue::Text(default.clone()),
            ParameterKind::Flag { token, default } => ParameterValue::Flag {
                token: token.clone(),
                enabled: *default,
            },
        }
    }

    fn prompt(&self) -> Prompt {
        match &self.kind {
            ParameterKind::FreeText { default } => {
                let default = Some(default.as_str()).filter(|d| !d.is_empty());
                Prompt::input(&self.name, &self.prompt, default)
            }
            ParameterKind::Flag { default, .. } => {
                Prompt::confirm(&self.name, &self.prompt, *default)
            }
        }
    }

    /// Interpret a raw answer. Empty means "use the default".
    pub fn parse(&self, raw: &str) -> std::result::Result<ParameterValue, AnswerError> {
        match &self.kind {
            ParameterKind::FreeText { default } => {
                let value = if raw.trim().is_empty() {
                    default.as_str()
                } else {
                    raw
                };
                if value.is_empty() {
                    return Err(AnswerError(format!("A value is required for {}", self.name)));
                }
                Ok(ParameterValue::Text(value.to_string()))
            }
            ParameterKind::Flag { token, default } => {
                let enabled = ask::parse_yes_no(raw, *default)?;
                Ok(ParameterValue::Flag {
                    token: token.clone(),
                    enabled,
                })
            }
        }
    }
}

/// A collected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Text(String),
    Flag { token: String, enabled: bool },
}

impl ParameterValue {
    /// The text, for free-text values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag { .. } => None,
        }
    }

    /// The token, for enabled flags.
    pub fn flag_token(&self) -> Option<&str> {
        match self {
            Self::Flag {
                token,
                enabled: true,
            } => Some(token),
            _ => None,
        }
    }
}

/// A parameter after collection: its identity, effective value and default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedParameter {
    pub name: String,
    pub value: ParameterValue,
    pub default: ParameterValue,
}

impl CollectedParameter {
    /// Whether the effective value is the default.
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }
}

/// Raw answers supplied up front (e.g. from command-line flags), by name.
/// A preset parameter is not prompted.
pub type Presets = HashMap<String, String>;

/// Collect every parameter in declaration order.
pub fn collect(
    specs: &[ParameterSpec],
    presets: &Presets,
    ui: &mut dyn UserInterface,
) -> Result<Vec<CollectedParameter>> {
    let mut collected = Vec::with_capacity(specs.len());

    for spec in specs {
        let value = match presets.get(&spec.name) {
            Some(raw) => spec
                .parse(raw)
                .map_err(|e| ChainbootError::InvalidAnswer {
                    key: spec.name.clone(),
                    message: e.to_string(),
                })?,
            None => ask::ask_until_valid(ui, &spec.prompt(), |raw| spec.parse(raw))?,
        };
        tracing::debug!(name = %spec.name, ?value, "collected parameter");

        collected.push(CollectedParameter {
            name: spec.name.clone(),
            value,
            default: spec.default_value(),
        });
    }

    Ok(collected)
}
