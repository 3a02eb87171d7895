//! Bootstrap Workflow — one-time setup for an unlinked workspace.
//!
//! Two modes, selected by explicit user choice: originate a new remote
//! project, or attach to an existing one and unify diverging histories.
//!
//! ```text
//! Unlinked → {Originate: Committed → Created & Pushed (terminal)}
//!          | {Attach:    Linked & Committed → Merged → Pushed (terminal)
//!                                           | MergeConflict (terminal)}
//! ```

use std::path::Path;

use tether_core::{paint, Style, Visibility, Workspace};

use crate::error::SyncError;
use crate::git;
use crate::guard;
use crate::prompt::Prompt;
use crate::runner::{require_tool, Runner};

/// Commit message for the initial commit when originating.
const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Commit message for pre-merge local files when attaching. The backup
/// commit guarantees the unrelated-histories merge has a local commit to
/// unify with instead of an empty tree.
const BACKUP_COMMIT_MESSAGE: &str = "Local init backup";

/// Terminal state of one bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// A fresh remote project was created and the workspace pushed to it.
    Created,
    /// The workspace was attached to an existing remote and published.
    Attached,
    /// The unrelated-histories merge hit conflicts; manual resolution is
    /// required and no push was attempted.
    MergeConflict,
}

/// Set up a remote link for an unlinked workspace.
///
/// Precondition: no link-state marker exists. Tool presence is probed
/// before any mutation; an empty remote URL or an unrecognized mode
/// selection is a fatal input-validation failure.
pub fn bootstrap<R: Runner, P: Prompt>(
    runner: &mut R,
    prompt: &mut P,
    workspace: &Path,
) -> Result<BootstrapOutcome, SyncError> {
    println!(
        "{}",
        paint("No repository link detected in this workspace.", Style::Info)
    );
    println!("\nChoose a setup mode:");
    println!("  1. Create a new remote project from this workspace");
    println!("  2. Attach to an existing remote repository and merge histories");

    let choice = prompt.ask("\nEnter selection (1/2): ")?;
    require_tool(runner, "git")?;

    match choice.as_str() {
        "1" => originate(runner, prompt, workspace),
        "2" => attach(runner, prompt, workspace),
        other => Err(SyncError::InvalidMode {
            choice: other.to_string(),
        }),
    }
}

/// Mode A — create a fresh remote project and push the workspace to it.
fn originate<R: Runner, P: Prompt>(
    runner: &mut R,
    prompt: &mut P,
    workspace: &Path,
) -> Result<BootstrapOutcome, SyncError> {
    require_tool(runner, "gh")?;

    let default_name = Workspace::new(workspace).dir_name();
    let answer = prompt.ask(&format!("New project name [{default_name}]: "))?;
    let name = if answer.is_empty() { default_name } else { answer };
    let visibility =
        Visibility::from_answer(&prompt.ask("Visibility (public/private) [public]: ")?);

    git::init(runner, workspace)?;
    guard::ensure_hidden(runner, workspace, guard::SELF_ARTIFACT)?;
    git::stage_all(runner, workspace)?;
    git::commit(runner, workspace, INITIAL_COMMIT_MESSAGE)?;

    runner.run_checked(
        &[
            "gh",
            "repo",
            "create",
            &name,
            visibility.as_flag(),
            "--source=.",
            "--push",
        ],
        workspace,
        false,
    )?;

    println!("{}", paint("\n=== Created and pushed ===", Style::Success));
    Ok(BootstrapOutcome::Created)
}

/// Mode B — attach to an existing remote and unify diverging histories.
fn attach<R: Runner, P: Prompt>(
    runner: &mut R,
    prompt: &mut P,
    workspace: &Path,
) -> Result<BootstrapOutcome, SyncError> {
    let url = prompt.ask("Remote URL (e.g. https://github.com/user/repo.git): ")?;
    if url.is_empty() {
        return Err(SyncError::EmptyRemoteUrl);
    }

    println!(
        "{}",
        paint("\n=== Initializing and connecting... ===", Style::Header)
    );
    git::init(runner, workspace)?;
    guard::ensure_hidden(runner, workspace, guard::SELF_ARTIFACT)?;
    git::remote_add(runner, workspace, &url)?;

    if git::has_pending_changes(runner, workspace)? {
        git::stage_all(runner, workspace)?;
        git::commit(runner, workspace, BACKUP_COMMIT_MESSAGE)?;
    }

    println!(
        "{}",
        paint("\n=== Pulling remote history and merging... ===", Style::Header)
    );
    let pull = git::pull_unrelated(runner, workspace)?;
    if !pull.success() {
        tracing::info!("unrelated-histories merge exited {}; leaving merge state for the user", pull.code);
        return Ok(BootstrapOutcome::MergeConflict);
    }

    println!("{}", paint("\n=== Pushing back to the remote... ===", Style::Header));
    git::push_set_upstream(runner, workspace, git::PRIMARY_BRANCH)?;

    println!(
        "{}",
        paint("\n=== Attached — workspace is now linked ===", Style::Success)
    );
    Ok(BootstrapOutcome::Attached)
}
