//! # tether-sync
//!
//! Reconciliation and bootstrap state machine for workspace-to-remote
//! synchronization, plus the single process-spawning boundary.
//!
//! Call [`pipeline::run`] with a [`Runner`] and a [`Prompt`]: it detects the
//! workspace link state and dispatches to the steady-state sync path
//! ([`engine::sync`]) or the one-time setup path ([`bootstrap::bootstrap`]).

pub mod bootstrap;
pub mod engine;
pub mod error;
pub mod git;
pub mod guard;
pub mod pipeline;
pub mod prompt;
pub mod runner;

pub use bootstrap::BootstrapOutcome;
pub use engine::SyncOutcome;
pub use error::SyncError;
pub use pipeline::RunOutcome;
pub use prompt::Prompt;
pub use runner::{ProcessRunner, Runner};

#[cfg(test)]
pub(crate) mod test_support;
