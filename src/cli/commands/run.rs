//! Run command implementation.
//!
//! The `chainboot run` command prepares the pinned toolchain and runs the
//! analyzer through it.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::resolve_config;
use crate::error::Result;
use crate::session::{Session, SessionOptions, SessionOutcome};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Run against the given command runner.
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
        let config = loaded.config;

        ui.show_header(&format!("Running analyzer on {}", config.toolchain));

        if self.args.dry_run || ui.output_mode() == OutputMode::Verbose {
            if let Some(source) = &loaded.source {
                ui.message(&format!("Config: {}", source.display()));
            }
        }
        if self.args.dry_run {
            ui.message("Running in dry-run mode - the toolchain and analyzer will not be touched");
        }

        let options = SessionOptions {
            dry_run: self.args.dry_run,
            keep_toolchain: self.args.keep_toolchain,
            presets: self.args.presets(),
        };
        let outcome = Session::new(&config, &self.project_root, options).run(runner, ui)?;

        report(&outcome, ui);
        Ok(CommandResult::from_exit_code(outcome.exit_code))
    }
}

/// End-of-run summary.
fn report(outcome: &SessionOutcome, ui: &mut dyn UserInterface) {
    let arguments = if outcome.state.tool_arguments.is_empty() {
        "(none)".to_string()
    } else {
        outcome.state.tool_arguments.join(" ")
    };
    ui.message(&format!("Analyzer arguments: {}", arguments));

    if outcome.dry_run {
        ui.success("Dry run complete");
    } else if outcome.exit_code == 0 {
        ui.success("Analyzer finished");
    } else {
        ui.error(&format!("Analyzer exited with code {}", outcome.exit_code));
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&mut SystemRunner, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Convention;
    use crate::error::ChainbootError;
    use crate::test_support::ScriptedRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const PROBE: &str = "rustup run nightly-2024-07-21 rustc --version";

    fn command(temp: &TempDir, args: RunArgs) -> RunCommand {
        RunCommand::new(temp.path(), None, args)
    }

    #[test]
    fn run_reports_summary() {
        let temp = TempDir::new().unwrap();
        let mut runner = ScriptedRunner::new();
        let mut ui = MockUI::new();

        let result = command(&temp, RunArgs::default())
            .execute_with(&mut runner, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Analyzer arguments: Cargo.toml graph.dot"));
        assert!(ui.has_success("Analyzer finished"));
        assert_eq!(ui.headers(), ["Running analyzer on nightly-2024-07-21"]);
    }

    #[test]
    fn analyzer_failure_becomes_exit_code() {
        let temp = TempDir::new().unwrap();
        let analyzer = "rustup run nightly-2024-07-21 cargo run -- Cargo.toml graph.dot";
        let mut runner = ScriptedRunner::new().respond(analyzer, 2, "");
        let mut ui = MockUI::new();

        let result = command(&temp, RunArgs::default())
            .execute_with(&mut runner, &mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::failure(2));
        assert!(ui.has_error("Analyzer exited with code 2"));
    }

    #[test]
    fn config_file_and_flags_combine() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("chainboot.yml"),
            "convention: invocation\ndefaults:\n  output: chains.dot\n",
        )
        .unwrap();
        let mut args = RunArgs {
            manifest: Some("sub/Manifest.toml".into()),
            call_graph: true,
            ..Default::default()
        };
        args.toolchain.toolchain = Some("nightly-2025-01-01".into());
        let mut runner = ScriptedRunner::new();
        let mut ui = MockUI::new();

        command(&temp, args)
            .execute_with(&mut runner, &mut ui)
            .unwrap();

        assert_eq!(ui.prompts_shown(), ["output"]);
        assert_eq!(
            runner.call_lines().last().unwrap(),
            "rustup run nightly-2025-01-01 cargo run -- sub/Manifest.toml chains.dot --call"
        );
    }

    #[test]
    fn convention_flag_overrides_file() {
        let temp = TempDir::new().unwrap();
        let mut args = RunArgs::default();
        args.toolchain.convention = Some(Convention::Invocation);
        let mut runner = ScriptedRunner::new();
        let mut ui = MockUI::new();

        command(&temp, args)
            .execute_with(&mut runner, &mut ui)
            .unwrap();

        assert_eq!(
            runner.calls().last().unwrap().cwd.as_deref(),
            Some(temp.path())
        );
    }

    #[test]
    fn invalid_config_fails_before_probing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("chainboot.yml"), "toolchain: [a, b]\n").unwrap();
        let mut runner = ScriptedRunner::new();
        let mut ui = MockUI::new();

        let err = command(&temp, RunArgs::default())
            .execute_with(&mut runner, &mut ui)
            .unwrap_err();

        assert!(matches!(err, ChainbootError::ConfigParseError { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let args = RunArgs {
            dry_run: true,
            ..Default::default()
        };
        let mut runner = ScriptedRunner::new().respond(PROBE, 1, "");
        let mut ui = MockUI::new();

        let result = command(&temp, args)
            .execute_with(&mut runner, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(runner.calls().len(), 2);
        assert!(ui.has_message("dry-run mode"));
        assert!(ui.has_success("Dry run complete"));
    }
}
