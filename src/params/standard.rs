//! The analyzer's parameter set.

use crate::config::{ChainbootConfig, Convention};

use super::ParameterSpec;

/// Manifest of the crate to analyze.
pub const MANIFEST: &str = "manifest";
/// Output file for the graph.
pub const OUTPUT: &str = "output";
/// Call graph instead of propagation chains.
pub const MODE: &str = "mode";

/// Parameters the analyzer takes, in the order it expects them.
pub fn standard_parameters(config: &ChainbootConfig) -> Vec<ParameterSpec> {
    let relative_to = match config.convention {
        Convention::Subdirectory => format!("relative to {}/", config.analyzer_dir),
        Convention::Invocation => "relative to the project".to_string(),
    };

    vec![
        ParameterSpec::free_text(
            MANIFEST,
            &format!("Manifest of the crate to analyze ({})", relative_to),
            &config.defaults.manifest,
        ),
        ParameterSpec::free_text(
            OUTPUT,
            &format!("Where to write the graph ({})", relative_to),
            &config.defaults.output,
        ),
        ParameterSpec::flag(
            MODE,
            "Output the full call graph instead of propagation chains?",
            config.convention.flag_token(),
            config.defaults.call_graph,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterKind;

    #[test]
    fn order_is_manifest_output_mode() {
        let names: Vec<_> = standard_parameters(&ChainbootConfig::default())
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec![MANIFEST, OUTPUT, MODE]);
    }

    #[test]
    fn defaults_come_from_config() {
        let mut config = ChainbootConfig::default();
        config.defaults.manifest = "crates/core/Cargo.toml".into();
        config.defaults.call_graph = true;

        let specs = standard_parameters(&config);

        assert_eq!(
            specs[0].kind,
            ParameterKind::FreeText {
                default: "crates/core/Cargo.toml".into()
            }
        );
        assert_eq!(
            specs[2].kind,
            ParameterKind::Flag {
                token: "keep".into(),
                default: true
            }
        );
    }

    #[test]
    fn flag_token_follows_convention() {
        let config = ChainbootConfig {
            convention: Convention::Invocation,
            ..Default::default()
        };

        let specs = standard_parameters(&config);

        assert!(matches!(
            &specs[2].kind,
            ParameterKind::Flag { token, .. } if token == "--call"
        ));
        assert!(specs[0].prompt.contains("relative to the project"));
    }

    #[test]
    fn subdirectory_prompts_name_the_directory() {
        let specs = standard_parameters(&ChainbootConfig::default());
        assert!(specs[0].prompt.contains("relative to analyzer/"));
    }
}
