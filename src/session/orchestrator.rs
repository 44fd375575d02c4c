//! The run: probe, install, collect, invoke, clean up.

use std::path::{Path, PathBuf};

use crate::config::ChainbootConfig;
use crate::error::{ChainbootError, Result};
use crate::invoke::{self, build_arguments, working_directory, Invocation};
use crate::params::{self, standard_parameters, Presets};
use crate::shell::{CommandRunner, CommandSpec};
use crate::toolchain::{
    self, probe_manager, probe_toolchain, CleanupDecision, InstallDecision, Presence,
    VersionManager,
};
use crate::ui::UserInterface;

use super::state::{SessionState, Stage};

/// Options for a single run.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Print side-effecting commands instead of running them.
    pub dry_run: bool,
    /// Never offer to uninstall.
    pub keep_toolchain: bool,
    /// Answers supplied up front, by parameter name.
    pub presets: Presets,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub state: SessionState,
    /// The analyzer's exit code (0 for a dry run).
    pub exit_code: i32,
    /// The analyzer command line.
    pub command: String,
    pub dry_run: bool,
}

/// Drives one run against a project.
pub struct Session<'a> {
    config: &'a ChainbootConfig,
    project_root: PathBuf,
    options: SessionOptions,
    manager: VersionManager,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a ChainbootConfig, project_root: &Path, options: SessionOptions) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
            options,
            manager: VersionManager::new(&config.manager, &config.toolchain, &config.components),
        }
    }

    /// Run every stage in order.
    ///
    /// Fatal stage failures return early with the matching error; nothing
    /// after the failing stage runs. A failed cleanup is only reported.
    pub fn run(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<SessionOutcome> {
        let mut state = SessionState::new();

        state.dependency_present = self.probe(runner, ui)?;

        if state.dependency_present {
            state.advance(Stage::SkipInstall);
        } else {
            state.advance(Stage::AwaitInstallConfirmation);
            match toolchain::decide_install(Presence::Absent, &self.manager, ui)? {
                InstallDecision::Install => {
                    state.advance(Stage::Installing);
                    if self.side_effect(ui, &self.manager.install()) {
                        toolchain::install(&self.manager, runner, ui)?;
                        state.installed_by_this_run = true;
                    }
                }
                InstallDecision::Skip => {
                    ui.message(&format!(
                        "Install it manually with: {}",
                        self.manager.install().display()
                    ));
                    return Err(ChainbootError::ToolchainDeclined {
                        toolchain: self.manager.toolchain.clone(),
                    });
                }
            }
        }

        state.advance(Stage::EnsureComponents);
        if !self.manager.components.is_empty()
            && self.side_effect(ui, &self.manager.add_components())
        {
            toolchain::ensure_components(&self.manager, runner, ui)?;
        }
        state.advance(Stage::Ready);

        state.advance(Stage::Collecting);
        let specs = standard_parameters(self.config);
        state.parameters = params::collect(&specs, &self.options.presets, ui)?;
        state.tool_arguments = build_arguments(&state.parameters);

        state.advance(Stage::Invoking);
        let invocation = Invocation {
            manager: self.manager.clone(),
            build_tool: self.config.build_tool.clone(),
            working_dir: working_directory(&self.project_root, self.config),
            arguments: state.tool_arguments.clone(),
        };
        let command = invocation.command().display();
        let invoked = if self.options.dry_run {
            ui.message(&format!("Would run: {}", command));
            Ok(0)
        } else {
            invoke::invoke(&invocation, runner)
        };

        // Cleanup is owed even when the analyzer could not be launched.
        self.cleanup(&mut state, runner, ui);
        state.advance(Stage::Done);

        Ok(SessionOutcome {
            state,
            exit_code: invoked?,
            command,
            dry_run: self.options.dry_run,
        })
    }

    /// Probe the manager (fatal) and the toolchain (never fatal).
    fn probe(&self, runner: &mut dyn CommandRunner, ui: &mut dyn UserInterface) -> Result<bool> {
        let mut spinner = ui.start_spinner(&format!("Checking for {}...", self.manager.toolchain));

        match probe_manager(&self.manager, runner) {
            Ok(info) => spinner.set_message(&format!(
                "{} found, checking for {}...",
                info.version, self.manager.toolchain
            )),
            Err(e) => {
                spinner.finish_error(&format!("{} not found", self.manager.program));
                return Err(e);
            }
        }

        let probe = probe_toolchain(&self.manager, runner);
        if probe.is_present() {
            let detail = probe.rustc_version.as_deref().unwrap_or("installed");
            spinner.finish_success(&format!("{} ({})", self.manager.toolchain, detail));
        } else {
            spinner.finish_skipped(&format!("{} is not installed", self.manager.toolchain));
        }

        Ok(probe.is_present())
    }

    /// Offer cleanup when this run installed the toolchain.
    ///
    /// Any failure here is reported as a warning.
    fn cleanup(
        &self,
        state: &mut SessionState,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) {
        if !state.installed_by_this_run || self.options.keep_toolchain {
            if state.installed_by_this_run {
                ui.message(&format!("Keeping {}", self.manager.toolchain));
            }
            state.advance(Stage::NoCleanup);
            return;
        }

        state.advance(Stage::AwaitCleanupConfirmation);
        let outcome = match toolchain::decide_cleanup(state.installed_by_this_run, &self.manager, ui)
        {
            Ok(CleanupDecision::Uninstall) => {
                state.advance(Stage::Uninstalling);
                toolchain::uninstall(&self.manager, runner, ui)
            }
            Ok(CleanupDecision::Keep) => Ok(()),
            Err(e) => Err(e),
        };

        // Cleanup never changes how the run ends.
        if let Err(e) = outcome {
            ui.warning(&format!(
                "{}. Remove it manually with: {}",
                e,
                self.manager.uninstall().display()
            ));
        }
    }

    /// In a dry run, print `spec` and report that it should not run.
    fn side_effect(&self, ui: &mut dyn UserInterface, spec: &CommandSpec) -> bool {
        if self.options.dry_run {
            ui.message(&format!("Would run: {}", spec.display()));
            false
        } else {
            true
        }
    }
}
