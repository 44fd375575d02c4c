//! Version manager command construction.
//!
//! [`VersionManager`] knows the command-line shape of `rustup` and turns each
//! toolchain operation into a [`CommandSpec`]. It never runs anything itself.

use crate::shell::CommandSpec;

/// The version manager and the pinned toolchain it manages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionManager {
    /// Manager executable (normally `rustup`).
    pub program: String,
    /// Pinned, date-stamped toolchain (e.g. `nightly-2024-07-21`).
    pub toolchain: String,
    /// Components the analyzer needs from that toolchain.
    pub components: Vec<String>,
}

impl VersionManager {
    /// Create a manager description.
    pub fn new(program: &str, toolchain: &str, components: &[String]) -> Self {
        Self {
            program: program.to_string(),
            toolchain: toolchain.to_string(),
            components: components.to_vec(),
        }
    }

    /// `rustup --version`: is the manager itself usable?
    pub fn version_query(&self) -> CommandSpec {
        CommandSpec::new(&self.program).arg("--version")
    }

    /// `rustup run <toolchain> rustc --version`: is the toolchain registered?
    ///
    /// Auto-install is disabled so the check has no side effects.
    pub fn toolchain_query(&self) -> CommandSpec {
        self.run_with_toolchain("rustc", ["--version"])
            .env("RUSTUP_AUTO_INSTALL", "0")
    }

    /// `rustup toolchain install <toolchain> --profile minimal`.
    pub fn install(&self) -> CommandSpec {
        CommandSpec::new(&self.program)
            .args(["toolchain", "install", &self.toolchain, "--profile", "minimal"])
            .inherit_stdio()
    }

    /// `rustup component add --toolchain <toolchain> <components...>`.
    ///
    /// Idempotent: components already present are left alone.
    pub fn add_components(&self) -> CommandSpec {
        CommandSpec::new(&self.program)
            .args(["component", "add", "--toolchain", &self.toolchain])
            .args(self.components.iter().cloned())
            .inherit_stdio()
    }

    /// `rustup component list --installed --toolchain <toolchain>`.
    pub fn installed_components(&self) -> CommandSpec {
        CommandSpec::new(&self.program).args([
            "component",
            "list",
            "--installed",
            "--toolchain",
            &self.toolchain,
        ])
    }

    /// `rustup toolchain uninstall <toolchain>`.
    pub fn uninstall(&self) -> CommandSpec {
        CommandSpec::new(&self.program)
            .args(["toolchain", "uninstall", &self.toolchain])
            .inherit_stdio()
    }

    /// `rustup run <toolchain> <program> <args...>`.
    pub fn run_with_toolchain<I, S>(&self, program: &str, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(&self.program)
            .args(["run", &self.toolchain, program])
            .args(args)
    }

    /// Components joined for messages.
    pub fn component_list(&self) -> String {
        self.components.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::StdioMode;

    fn manager() -> VersionManager {
        VersionManager::new(
            "rustup",
            "nightly-2024-07-21",
            &["rustc-dev".to_string(), "llvm-tools-preview".to_string()],
        )
    }

    #[test]
    fn version_query_is_captured() {
        let spec = manager().version_query();
        assert_eq!(spec.display(), "rustup --version");
        assert_eq!(spec.stdio, StdioMode::Capture);
    }

    #[test]
    fn toolchain_query_disables_auto_install() {
        let spec = manager().toolchain_query();
        assert_eq!(spec.display(), "rustup run nightly-2024-07-21 rustc --version");
        assert!(spec
            .env
            .contains(&("RUSTUP_AUTO_INSTALL".to_string(), "0".to_string())));
        assert_eq!(spec.stdio, StdioMode::Capture);
    }

    #[test]
    fn install_pins_toolchain_and_shows_output() {
        let spec = manager().install();
        assert_eq!(
            spec.display(),
            "rustup toolchain install nightly-2024-07-21 --profile minimal"
        );
        assert_eq!(spec.stdio, StdioMode::Inherit);
    }

    #[test]
    fn add_components_lists_every_component() {
        let spec = manager().add_components();
        assert_eq!(
            spec.display(),
            "rustup component add --toolchain nightly-2024-07-21 rustc-dev llvm-tools-preview"
        );
    }

    #[test]
    fn uninstall_targets_pinned_toolchain() {
        let spec = manager().uninstall();
        assert_eq!(spec.display(), "rustup toolchain uninstall nightly-2024-07-21");
    }

    #[test]
    fn component_list_is_comma_separated() {
        assert_eq!(manager().component_list(), "rustc-dev, llvm-tools-preview");
    }
}
