//! Toolchain installation and cleanup.
//!
//! Handles the side effects on the host's toolchain registry: offering to
//! install the pinned toolchain when the probe found it absent, making sure
//! the required components are present, and offering to uninstall afterwards.
//! Whether cleanup is offered depends only on the `installed_by_this_run`
//! flag the caller tracks, never on re-probing the host.

use crate::error::{ChainbootError, Result};
use crate::shell::CommandRunner;
use crate::ui::{ask, UserInterface};

use super::manager::VersionManager;
use super::probe::Presence;

/// Prompt key for the install confirmation.
pub const INSTALL_PROMPT_KEY: &str = "install";
/// Prompt key for the cleanup confirmation.
pub const CLEANUP_PROMPT_KEY: &str = "uninstall";

/// Whether to install the toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallDecision {
    Skip,
    Install,
}

/// Whether to uninstall the toolchain after the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupDecision {
    Keep,
    Uninstall,
}

/// Decide whether to install, asking only when the toolchain is absent.
pub fn decide_install(
    presence: Presence,
    manager: &VersionManager,
    ui: &mut dyn UserInterface,
) -> Result<InstallDecision> {
    if presence == Presence::Present {
        return Ok(InstallDecision::Skip);
    }

    let question = format!(
        "Toolchain {} is not installed. Install it now?",
        manager.toolchain
    );
    if ask::confirm(ui, INSTALL_PROMPT_KEY, &question, true)? {
        Ok(InstallDecision::Install)
    } else {
        Ok(InstallDecision::Skip)
    }
}

/// Install the pinned toolchain. Failure is fatal and not retried.
pub fn install(
    manager: &VersionManager,
    runner: &mut dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let spec = manager.install();
    ui.command(&spec.display());

    let code = match runner.run(&spec) {
        Ok(result) if result.success => {
            ui.success(&format!("Installed {}", manager.toolchain));
            return Ok(());
        }
        Ok(result) => result.exit_code,
        Err(e) => {
            tracing::warn!(error = %e, "install command could not run");
            None
        }
    };

    Err(ChainbootError::InstallFailed {
        toolchain: manager.toolchain.clone(),
        code,
    })
}

/// Make sure the required components are present on the toolchain.
///
/// Runs whether or not this session installed the toolchain: an existing
/// toolchain may still lack a component.
pub fn ensure_components(
    manager: &VersionManager,
    runner: &mut dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    if manager.components.is_empty() {
        return Ok(());
    }

    let spec = manager.add_components();
    ui.command(&spec.display());

    let code = match runner.run(&spec) {
        Ok(result) if result.success => {
            ui.success(&format!("Components ready: {}", manager.component_list()));
            return Ok(());
        }
        Ok(result) => result.exit_code,
        Err(e) => {
            tracing::warn!(error = %e, "component command could not run");
            None
        }
    };

    Err(ChainbootError::ComponentEnsureFailed {
        toolchain: manager.toolchain.clone(),
        components: manager.component_list(),
        code,
    })
}

/// Decide whether to uninstall. Asks only if this run installed the toolchain.
pub fn decide_cleanup(
    installed_by_this_run: bool,
    manager: &VersionManager,
    ui: &mut dyn UserInterface,
) -> Result<CleanupDecision> {
    if !installed_by_this_run {
        return Ok(CleanupDecision::Keep);
    }

    let question = format!(
        "Toolchain {} was installed for this run. Uninstall it now?",
        manager.toolchain
    );
    if ask::confirm(ui, CLEANUP_PROMPT_KEY, &question, true)? {
        Ok(CleanupDecision::Uninstall)
    } else {
        Ok(CleanupDecision::Keep)
    }
}

/// Uninstall the pinned toolchain.
///
/// The returned `CleanupFailed` is meant to be reported, not propagated.
pub fn uninstall(
    manager: &VersionManager,
    runner: &mut dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let spec = manager.uninstall();
    ui.command(&spec.display());

    let code = match runner.run(&spec) {
        Ok(result) if result.success => {
            ui.success(&format!("Uninstalled {}", manager.toolchain));
            return Ok(());
        }
        Ok(result) => result.exit_code,
        Err(e) => {
            tracing::warn!(error = %e, "uninstall command could not run");
            None
        }
    };

    Err(ChainbootError::CleanupFailed {
        toolchain: manager.toolchain.clone(),
        code,
    })
}
