//! Configuration validation rules.
//!
//! - Toolchain, manager and build tool must be non-empty
//! - Components must be non-empty names without whitespace
//! - The analyzer directory must be set for the `subdirectory` convention

use crate::config::schema::{ChainbootConfig, Convention};
use crate::error::{ChainbootError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Config field the error is about.
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every error rather than stopping at the first one.
pub fn validate_config(config: &ChainbootConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("toolchain", &config.toolchain),
        ("manager", &config.manager),
        ("build_tool", &config.build_tool),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::new(field, format!("'{}' must not be empty", field)));
        }
    }

    for component in &config.components {
        if component.trim().is_empty() || component.contains(char::is_whitespace) {
            errors.push(ValidationError::new(
                "components",
                format!("Invalid component name '{}'", component),
            ));
        }
    }

    if config.convention == Convention::Subdirectory && config.analyzer_dir.trim().is_empty() {
        errors.push(ValidationError::new(
            "analyzer_dir",
            "'analyzer_dir' must be set for the subdirectory convention",
        ));
    }

    errors
}

/// Validate a configuration, joining every error into one ChainbootError.
pub fn validate(config: &ChainbootConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(ChainbootError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
