//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions and defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! Precedence: built-in defaults < config file < command-line flags.
//!
//! # Example
//!
//! ```
//! use chainboot::config::{load_config, validate, Convention};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("chainboot.yml"), "convention: invocation").unwrap();
//!
//! let loaded = load_config(temp.path(), None).unwrap();
//! validate(&loaded.config).unwrap();
//! assert_eq!(loaded.config.convention, Convention::Invocation);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    discover_config, load_config, load_config_file, parse_config, resolve_config, LoadedConfig,
    CONFIG_FILE_NAMES,
};
pub use schema::{ChainbootConfig, ConfigOverrides, Convention, ParameterDefaults};
pub use validator::{validate, validate_config, ValidationError};
