//! External process execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{CommandResult, CommandRunner, CommandSpec, StdioMode, SystemRunner};
pub use platform::{is_ci, is_ci_with_env};
