//! Reconciliation Engine — the steady-state sync path for a linked workspace.
//!
//! Stage, commit, integrate remote changes, publish. Each stage is a
//! synchronous external invocation that must complete (or be explicitly
//! tolerated) before the next begins.

use std::path::Path;

use chrono::Local;
use tether_core::{paint, Style};

use crate::error::SyncError;
use crate::git;
use crate::guard;
use crate::runner::Runner;

/// Terminal state of one reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Local changes (if any) committed, remote integrated, branch published.
    Completed,
    /// The rebase pull hit conflicts; manual resolution is required and no
    /// push was attempted.
    PullConflict,
}

/// Generated message for commits without a user-supplied override.
fn default_commit_message() -> String {
    format!("Sync: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))
}

/// Reconcile a linked workspace with its remote.
///
/// Precondition: the workspace's link-state marker exists. The only
/// tolerated failures are the rebase pull (returned as
/// [`SyncOutcome::PullConflict`]) and a push whose output names the missing
/// upstream, which is retried exactly once with explicit upstream
/// parameters. Everything else propagates as a fatal [`SyncError`].
pub fn sync<R: Runner>(
    runner: &mut R,
    workspace: &Path,
    message: Option<&str>,
) -> Result<SyncOutcome, SyncError> {
    println!(
        "{}",
        paint("✓ Linked workspace detected, syncing...", Style::Success)
    );
    guard::ensure_hidden(runner, workspace, guard::SELF_ARTIFACT)?;

    if git::has_pending_changes(runner, workspace)? {
        println!("{}", paint("\n=== 1. Committing local changes ===", Style::Header));
        git::stage_all(runner, workspace)?;
        let msg = message
            .map(str::to_string)
            .unwrap_or_else(default_commit_message);
        git::commit(runner, workspace, &msg)?;
    } else {
        println!(
            "{}",
            paint("\n=== 1. No local changes, skipping commit ===", Style::Info)
        );
    }

    println!(
        "{}",
        paint("\n=== 2. Pulling remote updates (rebase) ===", Style::Header)
    );
    let pull = git::pull_rebase(runner, workspace)?;
    if !pull.success() {
        tracing::info!("rebase pull exited {}; stopping before push", pull.code);
        return Ok(SyncOutcome::PullConflict);
    }

    println!("{}", paint("\n=== 3. Pushing ===", Style::Header));
    let branch = git::current_branch(runner, workspace)?;
    let push = git::push(runner, workspace)?;
    if !push.success() {
        if push.output.contains(git::NO_UPSTREAM_MARKER) {
            println!(
                "{}",
                paint("⚠ First push — setting upstream automatically...", Style::Warn)
            );
            git::push_set_upstream(runner, workspace, &branch)?;
        } else {
            return Err(SyncError::CommandFailed {
                command: "git push".to_string(),
                code: push.code,
                output: push.output,
            });
        }
    }

    println!("{}", paint("\n=== Sync complete ===", Style::Success));
    Ok(SyncOutcome::Completed)
}
