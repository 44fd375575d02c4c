//! Configuration file discovery and loading.
//!
//! The config file is optional. Lookup order:
//! 1. An explicit `--config <path>` (must exist)
//! 2. `chainboot.yml` in the project root
//! 3. `.chainboot.yml` in the project root
//! 4. Built-in defaults

use crate::config::schema::{ChainbootConfig, ConfigOverrides};
use crate::config::validator::validate;
use crate::error::{ChainbootError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched for in the project root, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["chainboot.yml", ".chainboot.yml"];

/// A loaded configuration and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: ChainbootConfig,
    /// The file it was read from, or None for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Find the project config file, if any.
pub fn discover_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ChainbootConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ChainbootError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ChainbootError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into ChainbootConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ChainbootConfig> {
    if content.trim().is_empty() {
        return Ok(ChainbootConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ChainbootError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LoadedConfig> {
    let source = match config_override {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(project_root),
    };

    let config = match &source {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_config_file(path)?
        }
        None => {
            tracing::debug!("no config file, using defaults");
            ChainbootConfig::default()
        }
    };

    Ok(LoadedConfig { config, source })
}

/// Load config, apply command-line overrides, and validate the result.
pub fn resolve_config(
    project_root: &Path,
    config_override: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<LoadedConfig> {
    let loaded = load_config(project_root, config_override)?;
    let config = loaded.config.with_overrides(overrides);
    validate(&config)?;

    Ok(LoadedConfig {
        config,
        source: loaded.source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Convention;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();

        let loaded = load_config(temp.path(), None).unwrap();

        assert_eq!(loaded.source, None);
        assert_eq!(loaded.config, ChainbootConfig::default());
    }

    #[test]
    fn discovers_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("chainboot.yml"), "convention: invocation\n").unwrap();

        let loaded = load_config(temp.path(), None).unwrap();

        assert_eq!(loaded.source, Some(temp.path().join("chainboot.yml")));
        assert_eq!(loaded.config.convention, Convention::Invocation);
    }

    #[test]
    fn discovers_hidden_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".chainboot.yml"), "toolchain: nightly-2025-01-01\n").unwrap();

        let loaded = load_config(temp.path(), None).unwrap();

        assert_eq!(loaded.config.toolchain, "nightly-2025-01-01");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config(
            "defaults:\n  output: chains.dot\n",
            Path::new("chainboot.yml"),
        )
        .unwrap();

        assert_eq!(config.defaults.output, "chains.dot");
        assert_eq!(config.defaults.manifest, "Cargo.toml");
        assert_eq!(config.manager, "rustup");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");

        let err = load_config(temp.path(), Some(&path)).unwrap_err();

        assert!(matches!(err, ChainbootError::ConfigNotFound { .. }));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_config("toolchian: nightly\n", Path::new("chainboot.yml")).unwrap_err();

        assert!(matches!(err, ChainbootError::ConfigParseError { .. }));
        assert!(err.to_string().contains("toolchian"));
    }

    #[test]
    fn overrides_win_over_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("chainboot.yml"), "toolchain: nightly-2024-01-01\n").unwrap();
        let overrides = ConfigOverrides {
            toolchain: Some("nightly-2025-02-02".into()),
            ..Default::default()
        };

        let loaded = resolve_config(temp.path(), None, &overrides).unwrap();

        assert_eq!(loaded.config.toolchain, "nightly-2025-02-02");
    }

    #[test]
    fn resolve_rejects_invalid_result() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("chainboot.yml"), "manager: \"\"\n").unwrap();

        let err = resolve_config(temp.path(), None, &ConfigOverrides::default()).unwrap_err();

        assert!(matches!(err, ChainbootError::ConfigValidationError { .. }));
    }

    #[test]
    fn empty_file_is_defaults() {
        let config = parse_config("\n", Path::new("chainboot.yml")).unwrap();
        assert_eq!(config, ChainbootConfig::default());
    }
}
