//! Thin typed layer over the external `git` tool.
//!
//! Each function builds one argv and hands it to the [`Runner`]; nothing here
//! interprets output beyond trimming. The observable contracts this module
//! depends on — and which any substitute backing tool must preserve — are
//! exit codes and the [`NO_UPSTREAM_MARKER`] substring.

use std::path::Path;

use tether_core::CommandResult;

use crate::error::SyncError;
use crate::runner::Runner;

/// Fixed alias every remote link is registered under.
pub const REMOTE_ALIAS: &str = "origin";

/// Fixed primary branch name used when creating a fresh repository.
pub const PRIMARY_BRANCH: &str = "main";

/// Load-bearing substring: when the current branch has no upstream
/// configured, `git push` fails and its hint text contains
/// `git push --set-upstream origin <branch>`. This is the only failure-text
/// classification in the system.
pub const NO_UPSTREAM_MARKER: &str = "set-upstream";

/// `git init -b main` — fresh repository with the fixed primary branch.
pub fn init<R: Runner>(runner: &mut R, ws: &Path) -> Result<(), SyncError> {
    runner
        .run_checked(&["git", "init", "-b", PRIMARY_BRANCH], ws, false)
        .map(|_| ())
}

/// `git status --porcelain` — raw pending-change listing (silent query).
pub fn status_porcelain<R: Runner>(runner: &mut R, ws: &Path) -> Result<String, SyncError> {
    runner
        .run_checked(&["git", "status", "--porcelain"], ws, true)
        .map(|r| r.output)
}

/// Whether any local modification is not yet recorded.
pub fn has_pending_changes<R: Runner>(runner: &mut R, ws: &Path) -> Result<bool, SyncError> {
    Ok(!status_porcelain(runner, ws)?.trim().is_empty())
}

/// `git add .`
pub fn stage_all<R: Runner>(runner: &mut R, ws: &Path) -> Result<(), SyncError> {
    runner.run_checked(&["git", "add", "."], ws, false).map(|_| ())
}

/// `git commit -m <message>`
pub fn commit<R: Runner>(runner: &mut R, ws: &Path, message: &str) -> Result<(), SyncError> {
    runner
        .run_checked(&["git", "commit", "-m", message], ws, false)
        .map(|_| ())
}

/// `git pull --rebase --autostash` — tolerated: a conflict is the caller's
/// branch point, not an error.
pub fn pull_rebase<R: Runner>(runner: &mut R, ws: &Path) -> Result<CommandResult, SyncError> {
    runner.run(&["git", "pull", "--rebase", "--autostash"], ws, false)
}

/// `git pull origin main --allow-unrelated-histories` — tolerated, used once
/// during attach to unify diverging histories.
pub fn pull_unrelated<R: Runner>(runner: &mut R, ws: &Path) -> Result<CommandResult, SyncError> {
    runner.run(
        &[
            "git",
            "pull",
            REMOTE_ALIAS,
            PRIMARY_BRANCH,
            "--allow-unrelated-histories",
        ],
        ws,
        false,
    )
}

/// `git branch --show-current` — current branch name (silent query).
pub fn current_branch<R: Runner>(runner: &mut R, ws: &Path) -> Result<String, SyncError> {
    runner
        .run_checked(&["git", "branch", "--show-current"], ws, true)
        .map(|r| r.output.trim().to_string())
}

/// `git push` — tolerated so the caller can classify the failure text.
pub fn push<R: Runner>(runner: &mut R, ws: &Path) -> Result<CommandResult, SyncError> {
    runner.run(&["git", "push"], ws, false)
}

/// `git push --set-upstream origin <branch>` — explicit first publish.
pub fn push_set_upstream<R: Runner>(
    runner: &mut R,
    ws: &Path,
    branch: &str,
) -> Result<(), SyncError> {
    runner
        .run_checked(
            &["git", "push", "--set-upstream", REMOTE_ALIAS, branch],
            ws,
            false,
        )
        .map(|_| ())
}

/// `git remote add origin <url>`
pub fn remote_add<R: Runner>(runner: &mut R, ws: &Path, url: &str) -> Result<(), SyncError> {
    runner
        .run_checked(&["git", "remote", "add", REMOTE_ALIAS, url], ws, false)
        .map(|_| ())
}

/// `git ls-files -- <name>` — targeted index listing (silent query).
pub fn ls_files<R: Runner>(runner: &mut R, ws: &Path, name: &str) -> Result<String, SyncError> {
    runner
        .run_checked(&["git", "ls-files", "--", name], ws, true)
        .map(|r| r.output)
}

/// `git rm --cached <name>` — index-only removal; the local file stays.
pub fn untrack<R: Runner>(runner: &mut R, ws: &Path, name: &str) -> Result<(), SyncError> {
    runner
        .run_checked(&["git", "rm", "--cached", name], ws, false)
        .map(|_| ())
}
