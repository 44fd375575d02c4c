//! Status command implementation.
//!
//! The `chainboot status` command probes the host and reports what a run
//! would find, without installing or prompting.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::config::{resolve_config, ChainbootConfig};
use crate::error::{ChainbootError, Result};
use crate::invoke::working_directory;
use crate::shell::{CommandRunner, SystemRunner};
use crate::toolchain::{
    probe_components, probe_manager, probe_toolchain, ComponentStatus, VersionManager,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: StatusArgs,
}

/// What `status` found.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub manager: String,
    pub manager_version: String,
    pub toolchain: String,
    pub installed: bool,
    pub rustc_version: Option<String>,
    pub components: Vec<ComponentStatus>,
    pub convention: String,
    pub working_dir: PathBuf,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Probe everything `run` depends on.
    pub fn collect(
        &self,
        config: &ChainbootConfig,
        runner: &mut dyn CommandRunner,
    ) -> Result<StatusReport> {
        let manager = VersionManager::new(&config.manager, &config.toolchain, &config.components);
        let info = probe_manager(&manager, runner)?;
        let probe = probe_toolchain(&manager, runner);
        let components = if probe.is_present() {
            probe_components(&manager, runner)
        } else {
            config
                .components
                .iter()
                .map(|name| ComponentStatus {
                    name: name.clone(),
                    installed: false,
                })
                .collect()
        };

        Ok(StatusReport {
            manager: manager.program.clone(),
            manager_version: info.version,
            toolchain: manager.toolchain.clone(),
            installed: probe.is_present(),
            rustc_version: probe.rustc_version,
            components,
            convention: config.convention.as_str().to_string(),
            working_dir: working_directory(&self.project_root, config),
        })
    }

    /// Report against the given command runner.
    pub fn execute_with(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let loaded = resolve_config(
            &self.project_root,
            self.config_path.as_deref(),
            &self.args.toolchain.overrides(),
        )?;
        let report = self.collect(&loaded.config, runner)?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| ChainbootError::Other(e.into()))?;
            ui.message(&json);
        } else {
            show(&report, ui);
        }

        let ready = report.installed && report.components.iter().all(|c| c.installed);
        Ok(if ready {
            CommandResult::success()
        } else {
            CommandResult::failure(crate::exit_codes::FAILURE)
        })
    }
}

fn show(report: &StatusReport, ui: &mut dyn UserInterface) {
    ui.show_header("Status");
    ui.message(&format!("Manager:    {}", report.manager_version));

    match &report.rustc_version {
        Some(version) => ui.success(&format!("Toolchain:  {} ({})", report.toolchain, version)),
        None if report.installed => ui.success(&format!("Toolchain:  {}", report.toolchain)),
        None => ui.warning(&format!("Toolchain:  {} is not installed", report.toolchain)),
    }

    for component in &report.components {
        if component.installed {
            ui.success(&format!("Component:  {}", component.name));
        } else {
            ui.warning(&format!("Component:  {} is missing", component.name));
        }
    }

    ui.message(&format!(
        "Analyzer:   {} convention, runs in {}",
        report.convention,
        report.working_dir.display()
    ));
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&mut SystemRunner, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRunner;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    const VERSION: &str = "rustup --version";
    const PROBE: &str = "rustup run nightly-2024-07-21 rustc --version";
    const COMPONENT_LIST: &str =
        "rustup component list --installed --toolchain nightly-2024-07-21";

    fn ready_runner() -> ScriptedRunner {
        ScriptedRunner::new()
            .respond(VERSION, 0, "rustup 1.27.1\n")
            .respond(PROBE, 0, "rustc 1.82.0-nightly\n")
            .respond(
                COMPONENT_LIST,
                0,
                "rustc-dev-x86_64-unknown-linux-gnu\nllvm-tools-x86_64-unknown-linux-gnu\n",
            )
    }

    #[test]
    fn status_ready_host() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(temp.path(), None, StatusArgs::default());
        let mut runner = ready_runner();
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&mut runner, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("nightly-2024-07-21 (rustc 1.82.0-nightly)"));
        assert!(ui.has_success("Component:  rustc-dev"));
        assert!(ui.has_message("subdirectory convention"));
    }

    #[test]
    fn status_never_installs() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(temp.path(), None, StatusArgs::default());
        let mut runner = ScriptedRunner::new().respond(PROBE, 1, "");
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&mut runner, &mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.has_warning("is not installed"));
        assert!(ui.prompts_shown().is_empty());
        assert_eq!(runner.call_lines(), vec![VERSION, PROBE]);
    }

    #[test]
    fn status_json() {
        let temp = TempDir::new().unwrap();
        let args = StatusArgs {
            json: true,
            ..Default::default()
        };
        let cmd = StatusCommand::new(temp.path(), None, args);
        let mut runner = ready_runner();
        let mut ui = MockUI::new();

        cmd.execute_with(&mut runner, &mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["toolchain"], "nightly-2024-07-21");
        assert_eq!(json["installed"], true);
        assert_eq!(json["components"][1]["name"], "llvm-tools-preview");
    }

    #[test]
    fn status_missing_manager_is_error() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(temp.path(), None, StatusArgs::default());
        let mut runner = ScriptedRunner::new().unlaunchable(VERSION);
        let mut ui = MockUI::new();

        let err = cmd.execute_with(&mut runner, &mut ui).unwrap_err();

        assert_eq!(err.exit_code(), crate::exit_codes::MANAGER_MISSING);
    }
}
