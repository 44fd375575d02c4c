//! Environment probing.
//!
//! Two questions are asked of the host, with very different failure
//! semantics:
//!
//! - Is the version manager usable at all? If not, nothing else can work and
//!   the run stops with [`ChainbootError::ManagerUnavailable`].
//! - Is the pinned toolchain registered? Any negative or missing signal is
//!   [`Presence::Absent`]; the probe itself never fails the run.

use crate::error::{ChainbootError, Result};
use crate::shell::CommandRunner;

use super::manager::VersionManager;

/// Whether the pinned toolchain is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
}

/// What the version manager reported about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerInfo {
    /// First line of `--version` output.
    pub version: String,
}

/// Result of probing for the pinned toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainProbe {
    pub presence: Presence,
    /// First line of the toolchain's `rustc --version`, when present.
    pub rustc_version: Option<String>,
}

impl ToolchainProbe {
    /// Whether the toolchain was found.
    pub fn is_present(&self) -> bool {
        self.presence == Presence::Present
    }
}

fn first_line(output: &str) -> String {
    output.lines().next().unwrap_or_default().trim().to_string()
}

/// Check that the version manager can be run.
pub fn probe_manager(
    manager: &VersionManager,
    runner: &mut dyn CommandRunner,
) -> Result<ManagerInfo> {
    let spec = manager.version_query();
    let result = runner
        .run(&spec)
        .map_err(|e| ChainbootError::ManagerUnavailable {
            manager: manager.program.clone(),
            message: format!("could not run '{}': {}", spec.display(), e),
        })?;

    if !result.success {
        return Err(ChainbootError::ManagerUnavailable {
            manager: manager.program.clone(),
            message: format!(
                "'{}' exited with code {:?}",
                spec.display(),
                result.exit_code
            ),
        });
    }

    let info = ManagerInfo {
        version: first_line(&result.stdout),
    };
    tracing::debug!(version = %info.version, "version manager available");
    Ok(info)
}

/// Check whether the pinned toolchain is installed.
pub fn probe_toolchain(manager: &VersionManager, runner: &mut dyn CommandRunner) -> ToolchainProbe {
    let spec = manager.toolchain_query();
    let probe = match runner.run(&spec) {
        Ok(result) if result.success => ToolchainProbe {
            presence: Presence::Present,
            rustc_version: Some(first_line(&result.stdout)).filter(|v| !v.is_empty()),
        },
        Ok(result) => {
            tracing::debug!(code = ?result.exit_code, "toolchain query failed");
            ToolchainProbe {
                presence: Presence::Absent,
                rustc_version: None,
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "toolchain query could not run");
            ToolchainProbe {
                presence: Presence::Absent,
                rustc_version: None,
            }
        }
    };
    tracing::debug!(toolchain = %manager.toolchain, presence = ?probe.presence, "probed toolchain");
    probe
}

/// Whether one required component is installed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ComponentStatus {
    pub name: String,
    pub installed: bool,
}

/// Check each required component against the toolchain's installed list.
///
/// rustup lists components with their target triple appended and drops the
/// `-preview` suffix, so `llvm-tools-preview` shows up as
/// `llvm-tools-x86_64-unknown-linux-gnu`. A failed query reports every
/// component as missing.
pub fn probe_components(
    manager: &VersionManager,
    runner: &mut dyn CommandRunner,
) -> Vec<ComponentStatus> {
    let installed: Vec<String> = match runner.run(&manager.installed_components()) {
        Ok(result) if result.success => result.stdout.lines().map(|l| l.trim().to_string()).collect(),
        Ok(result) => {
            tracing::debug!(code = ?result.exit_code, "component query failed");
            Vec::new()
        }
        Err(e) => {
            tracing::debug!(error = %e, "component query could not run");
            Vec::new()
        }
    };

    manager
        .components
        .iter()
        .map(|name| {
            let base = name.strip_suffix("-preview").unwrap_or(name);
            let installed = installed
                .iter()
                .any(|line| line == name || line == base || line.starts_with(&format!("{}-", base)));
            ComponentStatus {
                name: name.clone(),
                installed,
            }
        })
        .collect()
}
