//! Toolchain probing, installation and cleanup.
//!
//! - [`manager`] builds the version manager's command lines
//! - [`probe`] detects the manager and the pinned toolchain
//! - [`installer`] installs, adds components and uninstalls

pub mod installer;
pub mod manager;
pub mod probe;

pub use installer::{
    decide_cleanup, decide_install, ensure_components, install, uninstall, CleanupDecision,
    InstallDecision,
};
pub use manager::VersionManager;
pub use probe::{
    probe_components, probe_manager, probe_toolchain, ComponentStatus, ManagerInfo, Presence,
    ToolchainProbe,
};
