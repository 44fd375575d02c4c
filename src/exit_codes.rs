//! Stable exit codes for chainboot.
//!
//! When the analyzer is reached, its own exit code is used instead.

/// Every stage succeeded.
pub const OK: i32 = 0;
/// Unexpected failure, including an analyzer that could not be launched.
pub const FAILURE: i32 = 1;
/// The configuration file is missing, malformed or invalid.
pub const CONFIG: i32 = 2;
/// The version manager itself is unavailable.
pub const MANAGER_MISSING: i32 = 3;
/// The pinned toolchain failed to install, or the operator declined it.
pub const INSTALL_FAILED: i32 = 4;
/// The required toolchain components could not be added.
pub const COMPONENT_FAILED: i32 = 5;
