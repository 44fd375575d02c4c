//! Test-only helpers for scripting external commands.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::Result;
use crate::shell::{CommandResult, CommandRunner, CommandSpec};

#[derive(Debug, Clone)]
enum Scripted {
    Exit { code: i32, stdout: String },
    Unlaunchable,
}

/// A [`CommandRunner`] that answers from a script keyed by the rendered
/// command line. Unscripted commands succeed with empty output.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    script: HashMap<String, Scripted>,
    calls: Vec<CommandSpec>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with `code`, printing `stdout`.
    pub fn respond(mut self, command: &str, code: i32, stdout: &str) -> Self {
        self.script.insert(
            command.to_string(),
            Scripted::Exit {
                code,
                stdout: stdout.to_string(),
            },
        );
        self
    }

    /// Make `command` fail to launch.
    pub fn unlaunchable(mut self, command: &str) -> Self {
        self.script
            .insert(command.to_string(), Scripted::Unlaunchable);
        self
    }

    /// Every command run so far, in order.
    pub fn calls(&self) -> &[CommandSpec] {
        &self.calls
    }

    /// Rendered command lines run so far, in order.
    pub fn call_lines(&self) -> Vec<String> {
        self.calls.iter().map(CommandSpec::display).collect()
    }

    /// Whether `command` was run at least once.
    pub fn ran(&self, command: &str) -> bool {
        self.calls.iter().any(|c| c.display() == command)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<CommandResult> {
        self.calls.push(spec.clone());
        match self.script.get(&spec.display()) {
            Some(Scripted::Unlaunchable) => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{}: not found", spec.program),
            )
            .into()),
            Some(Scripted::Exit { code: 0, stdout }) => Ok(CommandResult::success(
                stdout.clone(),
                String::new(),
                Duration::ZERO,
            )),
            Some(Scripted::Exit { code, stdout }) => Ok(CommandResult::failure(
                Some(*code),
                stdout.clone(),
                String::new(),
                Duration::ZERO,
            )),
            None => Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
        }
    }
}
