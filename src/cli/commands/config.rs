//! Config command implementation.
//!
//! The `chainboot config` command shows the resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::resolve_config;
use crate::error::{ChainbootError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = resolve_config(
            &self.project_root,
            self.config_path.as_deref(),
            &self.args.toolchain.overrides(),
        )?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&loaded.config)
                .map_err(|e| ChainbootError::Other(e.into()))?;
            ui.message(&json);
        } else {
            match &loaded.source {
                Some(path) => ui.message(&format!("# {}", path.display())),
                None => ui.message("# built-in defaults"),
            }
            let yaml =
                serde_yaml::to_string(&loaded.config).map_err(|e| ChainbootError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
