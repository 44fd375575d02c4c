//! External command execution.
//!
//! Every external program chainboot touches (`rustup`, and `cargo` through
//! `rustup run`) is described by a [`CommandSpec`] and run through a
//! [`CommandRunner`], so stages can be exercised against a scripted runner.

use crate::error::Result;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// Stdin closed, stdout and stderr captured. Never blocks on input.
    #[default]
    Capture,
    /// Stdin, stdout and stderr shared with chainboot's own terminal.
    Inherit,
}

/// A program invocation with an explicit argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandSpec {
    /// Program to launch, resolved through PATH.
    pub program: String,

    /// Arguments, passed without shell interpretation.
    pub args: Vec<String>,

    /// Working directory (None = inherit).
    pub cwd: Option<PathBuf>,

    /// Extra environment variables (merged with the process env).
    pub env: Vec<(String, String)>,

    /// Stream wiring.
    pub stdio: StdioMode,
}

impl CommandSpec {
    /// Create a spec for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Add an environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Share the terminal with the child.
    pub fn inherit_stdio(mut self) -> Self {
        self.stdio = StdioMode::Inherit;
        self
    }

    /// Render as a single line for messages and dry runs.
    pub fn display(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(quote(&self.program));
        parts.extend(self.args.iter().map(|a| quote(a)));
        parts.join(" ")
    }
}

fn quote(word: &str) -> String {
    if !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./+=:@,".contains(c))
    {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when inherited).
    pub stdout: String,

    /// Standard error (empty when inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Runs external commands.
///
/// `Err` means the program could not be launched; a program that ran and
/// exited non-zero is an `Ok` result with `success == false`.
pub trait CommandRunner {
    /// Run the command to completion.
    fn run(&mut self, spec: &CommandSpec) -> Result<CommandResult>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<CommandResult> {
        tracing::debug!(command = %spec.display(), cwd = ?spec.cwd, "spawning");
        let start = Instant::now();

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);

        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }

        for (key, value) in &spec.env {
            cmd.env(key, value);
        }

        let (status, stdout, stderr) = match spec.stdio {
            StdioMode::Capture => {
                let output = cmd
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()?;
                (
                    output.status,
                    String::from_utf8_lossy(&output.stdout).to_string(),
                    String::from_utf8_lossy(&output.stderr).to_string(),
                )
            }
            StdioMode::Inherit => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()?;
                (status, String::new(), String::new())
            }
        };

        let duration = start.elapsed();
        tracing::debug!(code = ?status.code(), ?duration, "command finished");

        if status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }
}
