//! Configuration schema.
//!
//! Every field is optional in the file; missing fields take the built-in
//! defaults below.
//!
//! ```yaml
//! toolchain: nightly-2024-07-21
//! components: [rustc-dev, llvm-tools-preview]
//! manager: rustup
//! build_tool: cargo
//! convention: subdirectory
//! analyzer_dir: analyzer
//! defaults:
//!   manifest: Cargo.toml
//!   output: graph.dot
//!   call_graph: false
//! ```

use serde::{Deserialize, Serialize};

/// Toolchain the analyzer's compiler internals are built against.
pub const DEFAULT_TOOLCHAIN: &str = "nightly-2024-07-21";
/// Components the analyzer needs to link against rustc.
pub const DEFAULT_COMPONENTS: &[&str] = &["rustc-dev", "llvm-tools-preview"];
pub const DEFAULT_MANAGER: &str = "rustup";
pub const DEFAULT_BUILD_TOOL: &str = "cargo";
pub const DEFAULT_ANALYZER_DIR: &str = "analyzer";
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";
pub const DEFAULT_OUTPUT: &str = "graph.dot";

/// How arguments and working directory are shaped for the analyzer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Run inside the analyzer's subdirectory; paths are relative to it and
    /// the mode switch is the bare word `keep`.
    #[default]
    Subdirectory,
    /// Run in the project directory; paths are relative to it and the mode
    /// switch is `--call`.
    Invocation,
}

impl Convention {
    /// Token appended to the arguments when the mode switch is on.
    pub fn flag_token(&self) -> &'static str {
        match self {
            Self::Subdirectory => "keep",
            Self::Invocation => "--call",
        }
    }

    /// Config-file spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subdirectory => "subdirectory",
            Self::Invocation => "invocation",
        }
    }
}

/// Defaults for the collected run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterDefaults {
    /// Manifest of the crate to analyze.
    pub manifest: String,
    /// Where the analyzer writes its graph.
    pub output: String,
    /// Whether to ask for the full call graph instead of propagation chains.
    pub call_graph: bool,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            call_graph: false,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainbootConfig {
    /// Pinned toolchain.
    pub toolchain: String,
    /// Toolchain components to ensure.
    pub components: Vec<String>,
    /// Version manager executable.
    pub manager: String,
    /// Build tool run through the toolchain.
    pub build_tool: String,
    pub convention: Convention,
    /// Analyzer crate directory, relative to the project root. Used by the
    /// `subdirectory` convention.
    pub analyzer_dir: String,
    pub defaults: ParameterDefaults,
}

impl Default for ChainbootConfig {
    fn default() -> Self {
        Self {
            toolchain: DEFAULT_TOOLCHAIN.to_string(),
            components: DEFAULT_COMPONENTS.iter().map(|c| c.to_string()).collect(),
            manager: DEFAULT_MANAGER.to_string(),
            build_tool: DEFAULT_BUILD_TOOL.to_string(),
            convention: Convention::default(),
            analyzer_dir: DEFAULT_ANALYZER_DIR.to_string(),
            defaults: ParameterDefaults::default(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub toolchain: Option<String>,
    pub convention: Option<Convention>,
    pub analyzer_dir: Option<String>,
}

impl ChainbootConfig {
    /// Apply command-line overrides.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(toolchain) = &overrides.toolchain {
            self.toolchain = toolchain.clone();
        }
        if let Some(convention) = overrides.convention {
            self.convention = convention;
        }
        if let Some(dir) = &overrides.analyzer_dir {
            self.analyzer_dir = dir.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pin_nightly_with_rustc_dev() {
        let config = ChainbootConfig::default();
        assert!(config.toolchain.starts_with("nightly-"));
        assert!(config.components.contains(&"rustc-dev".to_string()));
        assert_eq!(config.convention, Convention::Subdirectory);
        assert_eq!(config.defaults.manifest, "Cargo.toml");
        assert_eq!(config.defaults.output, "graph.dot");
        assert!(!config.defaults.call_graph);
    }

    #[test]
    fn convention_tokens() {
        assert_eq!(Convention::Subdirectory.flag_token(), "keep");
        assert_eq!(Convention::Invocation.flag_token(), "--call");
    }

    #[test]
    fn convention_deserializes_lowercase() {
        let c: Convention = serde_yaml::from_str("invocation").unwrap();
        assert_eq!(c, Convention::Invocation);
        assert_eq!(c.as_str(), "invocation");
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = ConfigOverrides {
            toolchain: Some("nightly-2025-01-01".into()),
            convention: None,
            analyzer_dir: Some("tools/analyzer".into()),
        };

        let config = ChainbootConfig::default().with_overrides(&overrides);

        assert_eq!(config.toolchain, "nightly-2025-01-01");
        assert_eq!(config.convention, Convention::Subdirectory);
        assert_eq!(config.analyzer_dir, "tools/analyzer");
    }
}
