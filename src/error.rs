//! Error types for chainboot operations.
//!
//! This module defines [`ChainbootError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal stages (missing version manager, failed install, failed component
//!   setup) surface as `ChainbootError` and end the run with a distinct exit code
//! - A failed cleanup is carried as `CleanupFailed` and only ever reported
//! - The analyzer's own non-zero exit is not an error; it becomes the exit status
//! - Use `anyhow::Error` (via `ChainbootError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::exit_codes;

/// Core error type for chainboot operations.
#[derive(Debug, Error)]
pub enum ChainbootError {
    /// The version manager itself could not be run.
    #[error("Version manager '{manager}' is not available: {message}")]
    ManagerUnavailable { manager: String, message: String },

    /// Installing the pinned toolchain failed.
    #[error("Failed to install toolchain '{toolchain}' (exit code {code:?})")]
    InstallFailed {
        toolchain: String,
        code: Option<i32>,
    },

    /// The operator declined to install a toolchain the analyzer cannot run without.
    #[error("Toolchain '{toolchain}' is required but was not installed")]
    ToolchainDeclined { toolchain: String },

    /// Adding the required toolchain components failed.
    #[error("Failed to add components [{components}] to '{toolchain}' (exit code {code:?})")]
    ComponentEnsureFailed {
        toolchain: String,
        components: String,
        code: Option<i32>,
    },

    /// The analyzer could not be launched at all.
    #[error("Failed to launch analyzer: {command}")]
    InvocationFailed { command: String },

    /// Uninstalling a toolchain installed by this run failed.
    #[error("Failed to uninstall toolchain '{toolchain}' (exit code {code:?})")]
    CleanupFailed {
        toolchain: String,
        code: Option<i32>,
    },

    /// An answer could not be interpreted and there is no terminal to ask again.
    #[error("Invalid answer for '{key}': {message}")]
    InvalidAnswer { key: String, message: String },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChainbootError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ManagerUnavailable { .. } => exit_codes::MANAGER_MISSING,
            Self::InstallFailed { .. } | Self::ToolchainDeclined { .. } => {
                exit_codes::INSTALL_FAILED
            }
            Self::ComponentEnsureFailed { .. } => exit_codes::COMPONENT_FAILED,
            Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::ConfigValidationError { .. } => exit_codes::CONFIG,
            Self::InvocationFailed { .. }
            | Self::CleanupFailed { .. }
            | Self::InvalidAnswer { .. }
            | Self::Io(_)
            | Self::Other(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for chainboot operations.
pub type Result<T> = std::result::Result<T, ChainbootError>;
