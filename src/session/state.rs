//! Per-run session state and its stage machine.

use std::fmt;

use crate::params::CollectedParameter;

/// Position in the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Probing,
    SkipInstall,
    AwaitInstallConfirmation,
    Installing,
    EnsureComponents,
    Ready,
    Collecting,
    Invoking,
    NoCleanup,
    AwaitCleanupConfirmation,
    Uninstalling,
    Done,
}

impl Stage {
    /// Stages reachable from this one.
    pub fn successors(self) -> &'static [Stage] {
        use Stage::*;
        match self {
            Probing => &[SkipInstall, AwaitInstallConfirmation],
            SkipInstall => &[EnsureComponents],
            AwaitInstallConfirmation => &[Installing],
            Installing => &[EnsureComponents],
            EnsureComponents => &[Ready],
            Ready => &[Collecting],
            Collecting => &[Invoking],
            Invoking => &[NoCleanup, AwaitCleanupConfirmation],
            NoCleanup => &[Done],
            AwaitCleanupConfirmation => &[Uninstalling, Done],
            Uninstalling => &[Done],
            Done => &[],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Probing => "probing",
            Self::SkipInstall => "skip-install",
            Self::AwaitInstallConfirmation => "await-install-confirmation",
            Self::Installing => "installing",
            Self::EnsureComponents => "ensure-components",
            Self::Ready => "ready",
            Self::Collecting => "collecting",
            Self::Invoking => "invoking",
            Self::NoCleanup => "no-cleanup",
            Self::AwaitCleanupConfirmation => "await-cleanup-confirmation",
            Self::Uninstalling => "uninstalling",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Everything one run knows about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the probe found the pinned toolchain.
    pub dependency_present: bool,
    /// True only if this run installed the toolchain successfully.
    /// Cleanup is offered on this flag alone.
    pub installed_by_this_run: bool,
    /// Collected parameters, in declaration order.
    pub parameters: Vec<CollectedParameter>,
    /// Arguments handed to the analyzer.
    pub tool_arguments: Vec<String>,
    pub stage: Stage,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            dependency_present: false,
            installed_by_this_run: false,
            parameters: Vec::new(),
            tool_arguments: Vec::new(),
            stage: Stage::Probing,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `next`, logging the transition.
    pub fn advance(&mut self, next: Stage) {
        debug_assert!(
            self.stage.successors().contains(&next),
            "illegal transition {} -> {}",
            self.stage,
            next
        );
        tracing::debug!(from = %self.stage, to = %next, "stage transition");
        self.stage = next;
    }
}
