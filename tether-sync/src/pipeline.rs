//! Orchestrator — detects workspace link state and dispatches.
//!
//! This is the sole entry decision point; it performs no version-control
//! mutation itself and never interprets errors from the workflows below it.

use tether_core::{LinkState, Workspace};

use crate::bootstrap::{self, BootstrapOutcome};
use crate::engine::{self, SyncOutcome};
use crate::error::SyncError;
use crate::prompt::Prompt;
use crate::runner::Runner;

/// Terminal state of one invocation, flattened across both workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Reconciliation completed and the branch is published.
    Synced,
    /// Reconciliation stopped at a rebase conflict; user action required.
    PullConflict,
    /// Bootstrap created a fresh remote project.
    Created,
    /// Bootstrap attached to an existing remote.
    Attached,
    /// Bootstrap stopped at an unrelated-histories merge conflict.
    MergeConflict,
}

/// Dispatch to the Reconciliation Engine (linked workspace) or the
/// Bootstrap Workflow (unlinked workspace).
pub fn run<R: Runner, P: Prompt>(
    runner: &mut R,
    prompt: &mut P,
    workspace: &Workspace,
    message: Option<&str>,
) -> Result<RunOutcome, SyncError> {
    match workspace.link_state() {
        LinkState::Linked => {
            let outcome = engine::sync(runner, &workspace.root, message)?;
            Ok(match outcome {
                SyncOutcome::Completed => RunOutcome::Synced,
                SyncOutcome::PullConflict => RunOutcome::PullConflict,
            })
        }
        LinkState::Unlinked => {
            let outcome = bootstrap::bootstrap(runner, prompt, &workspace.root)?;
            Ok(match outcome {
                BootstrapOutcome::Created => RunOutcome::Created,
                BootstrapOutcome::Attached => RunOutcome::Attached,
                BootstrapOutcome::MergeConflict => RunOutcome::MergeConflict,
            })
        }
    }
}
