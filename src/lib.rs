//! chainboot - run a nightly-pinned static analyzer without disturbing the
//! host's toolchains.
//!
//! A run probes for the version manager and the pinned toolchain, offers to
//! install what is missing, asks for the analyzer's parameters, runs the
//! analyzer through the toolchain, and offers to remove a toolchain it
//! installed.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`exit_codes`] - Process exit codes
//! - [`invoke`] - Argument vector construction and analyzer invocation
//! - [`params`] - Parameter collection
//! - [`session`] - The run's state machine
//! - [`shell`] - External command execution
//! - [`toolchain`] - Toolchain probing, installation and cleanup
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use chainboot::config::ChainbootConfig;
//! use chainboot::invoke::build_arguments;
//! use chainboot::params::{collect, standard_parameters, Presets};
//! use chainboot::ui::MockUI;
//!
//! let config = ChainbootConfig::default();
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("mode", "yes");
//!
//! let params = collect(&standard_parameters(&config), &Presets::new(), &mut ui).unwrap();
//! assert_eq!(build_arguments(&params), ["Cargo.toml", "graph.dot", "keep"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod invoke;
pub mod params;
pub mod session;
pub mod shell;
pub mod toolchain;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ChainbootError, Result};
