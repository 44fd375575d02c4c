//! One run of the orchestrator.
//!
//! [`Session`] owns the flow from probing to cleanup and records what
//! happened in a [`SessionState`]. The state lives for the duration of the
//! process and is discarded at exit.

mod orchestrator;
mod state;

pub use orchestrator::{Session, SessionOptions, SessionOutcome};
pub use state::{SessionState, Stage};
