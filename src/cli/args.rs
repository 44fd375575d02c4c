//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{ConfigOverrides, Convention};
use crate::params::{Presets, MANIFEST, MODE, OUTPUT};

/// Chainboot - Run a nightly-pinned analyzer without touching your toolchains.
#[derive(Debug, Parser)]
#[command(name = "chainboot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides chainboot.yml in the project root)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prepare the toolchain and run the analyzer (default if no command specified)
    Run(RunArgs),

    /// Show version manager and toolchain state
    Status(StatusArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub toolchain: ToolchainArgs,

    /// Manifest of the crate to analyze (skips the prompt)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<String>,

    /// Output file for the graph (skips the prompt)
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Output the full call graph (skips the prompt)
    #[arg(long, conflicts_with = "chains")]
    pub call_graph: bool,

    /// Output propagation chains only (skips the prompt)
    #[arg(long)]
    pub chains: bool,

    /// Print commands that change the host instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,

    /// Never offer to uninstall a toolchain installed by this run
    #[arg(long)]
    pub keep_toolchain: bool,
}

impl RunArgs {
    /// Parameter answers given on the command line.
    pub fn presets(&self) -> Presets {
        let mut presets = Presets::new();
        if let Some(manifest) = &self.manifest {
            presets.insert(MANIFEST.to_string(), manifest.clone());
        }
        if let Some(output) = &self.output {
            presets.insert(OUTPUT.to_string(), output.clone());
        }
        if self.call_graph {
            presets.insert(MODE.to_string(), "yes".to_string());
        } else if self.chains {
            presets.insert(MODE.to_string(), "no".to_string());
        }
        presets
    }
}

/// Toolchain selection flags shared by `run`, `status` and `config`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ToolchainArgs {
    /// Toolchain to use instead of the pinned one
    #[arg(long, value_name = "TOOLCHAIN")]
    pub toolchain: Option<String>,

    /// How the analyzer is laid out relative to the project
    #[arg(long, value_enum)]
    pub convention: Option<Convention>,

    /// Analyzer directory for the subdirectory convention
    #[arg(long, value_name = "DIR")]
    pub analyzer_dir: Option<String>,
}

impl ToolchainArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            toolchain: self.toolchain.clone(),
            convention: self.convention,
            analyzer_dir: self.analyzer_dir.clone(),
        }
    }
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub toolchain: ToolchainArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub toolchain: ToolchainArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
