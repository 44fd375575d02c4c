//! Analyzer invocation.
//!
//! The argument vector is derived from the collected parameters: positional
//! (free-text) values first in collection order, then enabled flag tokens in
//! declaration order. The analyzer is then run through the build tool on the
//! pinned toolchain, sharing chainboot's terminal.

use std::path::{Path, PathBuf};

use crate::config::{ChainbootConfig, Convention};
use crate::error::{ChainbootError, Result};
use crate::exit_codes;
use crate::params::{CollectedParameter, ParameterValue};
use crate::shell::{CommandRunner, CommandSpec};
use crate::toolchain::VersionManager;

/// Build the analyzer's argument vector.
///
/// Pure: identical parameters always give an identical vector.
pub fn build_arguments(parameters: &[CollectedParameter]) -> Vec<String> {
    let positional = parameters.iter().filter_map(|p| match &p.value {
        ParameterValue::Text(text) => Some(text.clone()),
        ParameterValue::Flag { .. } => None,
    });
    let flags = parameters
        .iter()
        .filter_map(|p| p.value.flag_token().map(String::from));

    positional.chain(flags).collect()
}

/// Directory the build tool runs in for the given convention.
pub fn working_directory(project_root: &Path, config: &ChainbootConfig) -> PathBuf {
    match config.convention {
        Convention::Subdirectory => project_root.join(&config.analyzer_dir),
        Convention::Invocation => project_root.to_path_buf(),
    }
}

/// A fully resolved analyzer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub manager: VersionManager,
    pub build_tool: String,
    pub working_dir: PathBuf,
    pub arguments: Vec<String>,
}

impl Invocation {
    /// `rustup run <toolchain> cargo run -- <arguments...>` in `working_dir`.
    pub fn command(&self) -> CommandSpec {
        self.manager
            .run_with_toolchain(&self.build_tool, ["run", "--"])
            .args(self.arguments.iter().cloned())
            .current_dir(&self.working_dir)
            .inherit_stdio()
    }
}

/// Run the analyzer and wait for it.
///
/// Returns the analyzer's exit code. A child killed by a signal counts as
/// [`exit_codes::FAILURE`]. Only a launch failure is an error.
pub fn invoke(invocation: &Invocation, runner: &mut dyn CommandRunner) -> Result<i32> {
    let spec = invocation.command();
    tracing::info!(command = %spec.display(), dir = %invocation.working_dir.display(), "invoking analyzer");

    let result = runner.run(&spec).map_err(|e| {
        tracing::warn!(error = %e, "analyzer launch failed");
        ChainbootError::InvocationFailed {
            command: spec.display(),
        }
    })?;

    Ok(result.exit_code.unwrap_or(exit_codes::FAILURE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRunner;

    fn text(name: &str, value: &str, default: &str) -> CollectedParameter {
        CollectedParameter {
            name: name.into(),
            value: ParameterValue::Text(value.into()),
            default: ParameterValue::Text(default.into()),
        }
    }

    fn flag(name: &str, token: &str, enabled: bool) -> CollectedParameter {
        CollectedParameter {
            name: name.into(),
            value: ParameterValue::Flag {
                token: token.into(),
                enabled,
            },
            default: ParameterValue::Flag {
                token: token.into(),
                enabled: false,
            },
        }
    }

    fn invocation(arguments: Vec<String>) -> Invocation {
        Invocation {
            manager: VersionManager::new("rustup", "nightly-2024-07-21", &[]),
            build_tool: "cargo".into(),
            working_dir: PathBuf::from("/work/analyzer"),
            arguments,
        }
    }

    #[test]
    fn defaults_without_flag() {
        let params = vec![
            text("manifest", "Cargo.toml", "Cargo.toml"),
            text("output", "graph.dot", "graph.dot"),
            flag("mode", "keep", false),
        ];
        assert_eq!(build_arguments(&params), vec!["Cargo.toml", "graph.dot"]);
    }

    #[test]
    fn override_with_flag() {
        let params = vec![
            text("manifest", "sub/Manifest.toml", "Cargo.toml"),
            text("output", "graph.dot", "graph.dot"),
            flag("mode", "--call", true),
        ];
        assert_eq!(
            build_arguments(&params),
            vec!["sub/Manifest.toml", "graph.dot", "--call"]
        );
    }

    #[test]
    fn flags_follow_positionals_regardless_of_declaration_position() {
        let params = vec![
            flag("verbose", "-v", true),
            text("manifest", "Cargo.toml", "Cargo.toml"),
            flag("mode", "keep", true),
            text("output", "out.dot", "graph.dot"),
        ];
        assert_eq!(
            build_arguments(&params),
            vec!["Cargo.toml", "out.dot", "-v", "keep"]
        );
    }

    #[test]
    fn enabled_flag_appears_exactly_once() {
        let params = vec![
            text("manifest", "Cargo.toml", "Cargo.toml"),
            text("output", "graph.dot", "graph.dot"),
            flag("mode", "--call", true),
        ];
        let args = build_arguments(&params);
        assert_eq!(args.iter().filter(|a| *a == "--call").count(), 1);
        assert_eq!(args, ["Cargo.toml", "graph.dot", "--call"]);
    }

    #[test]
    fn flag_token_is_appended_even_if_a_positional_matches() {
        let params = vec![text("manifest", "keep", "Cargo.toml"), flag("mode", "keep", true)];
        let args = build_arguments(&params);
        assert_eq!(args.iter().filter(|a| *a == "keep").count(), 2);
        assert_eq!(args.last().map(String::as_str), Some("keep"));
    }

    #[test]
    fn argument_vector_is_deterministic() {
        let params = vec![
            text("manifest", "a b/Cargo.toml", "Cargo.toml"),
            flag("mode", "--call", true),
        ];
        assert_eq!(build_arguments(&params), build_arguments(&params.clone()));
    }

    #[test]
    fn working_directory_per_convention() {
        let root = Path::new("/work");
        let mut config = ChainbootConfig::default();
        assert_eq!(working_directory(root, &config), PathBuf::from("/work/analyzer"));

        config.convention = Convention::Invocation;
        assert_eq!(working_directory(root, &config), PathBuf::from("/work"));
    }

    #[test]
    fn command_runs_build_tool_through_toolchain() {
        let spec = invocation(vec!["Cargo.toml".into(), "graph.dot".into()]).command();

        assert_eq!(
            spec.display(),
            "rustup run nightly-2024-07-21 cargo run -- Cargo.toml graph.dot"
        );
        assert_eq!(spec.cwd, Some(PathBuf::from("/work/analyzer")));
        assert_eq!(spec.stdio, crate::shell::StdioMode::Inherit);
    }

    #[test]
    fn invoke_mirrors_exit_code() {
        let inv = invocation(vec!["Cargo.toml".into()]);
        let mut runner = ScriptedRunner::new().respond(
            "rustup run nightly-2024-07-21 cargo run -- Cargo.toml",
            101,
            "",
        );

        assert_eq!(invoke(&inv, &mut runner).unwrap(), 101);
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn invoke_launch_failure_is_error() {
        let inv = invocation(vec![]);
        let mut runner =
            ScriptedRunner::new().unlaunchable("rustup run nightly-2024-07-21 cargo run --");

        let err = invoke(&inv, &mut runner).unwrap_err();

        assert!(matches!(err, ChainbootError::InvocationFailed { .. }));
    }
}
