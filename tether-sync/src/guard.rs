//! Exclusion Guard — keeps a designated artifact out of the remote's tree.
//!
//! Prospective: missing ignore patterns are appended to `.gitignore` under a
//! marker comment. Retroactive: if the artifact is already recorded by the
//! index (a prior run leaked it), it is removed from the index without
//! deleting the local file. Must run before any staging step in every
//! workflow, so a leaked artifact is untracked before it could be committed
//! again.

use std::fs;
use std::path::Path;

use tether_core::{ignore, paint, Style};

use crate::error::{io_err, SyncError};
use crate::git;
use crate::runner::Runner;

/// Name of this tool's own binary; a copy dropped into the workspace must
/// never be tracked. Fixed by name — the running executable's location is
/// deliberately not consulted.
pub const SELF_ARTIFACT: &str = "tether";

/// Ensure `artifact` can never reach the remote's recorded tree.
///
/// Idempotent: with no missing patterns and nothing tracked, no mutation is
/// performed. Precondition: `workspace` is already a repository (the index
/// query requires one).
pub fn ensure_hidden<R: Runner>(
    runner: &mut R,
    workspace: &Path,
    artifact: &str,
) -> Result<(), SyncError> {
    let path = workspace.join(".gitignore");
    let existing = if path.exists() {
        fs::read_to_string(&path).map_err(|e| io_err(&path, e))?
    } else {
        String::new()
    };

    let required = ignore::required_patterns(artifact);
    let missing = ignore::missing_patterns(&existing, &required);
    if !missing.is_empty() {
        let updated = ignore::append_block(&existing, &missing);
        fs::write(&path, updated).map_err(|e| io_err(&path, e))?;
        tracing::info!("appended {} ignore pattern(s)", missing.len());
        println!("{}", paint("✎ .gitignore updated", Style::Warn));
    }

    let listed = git::ls_files(runner, workspace, artifact)?;
    if listed.lines().any(|line| line.trim() == artifact) {
        git::untrack(runner, workspace, artifact)?;
        println!(
            "{}",
            paint(
                &format!("✓ '{artifact}' removed from the index (local file kept)"),
                Style::Warn,
            )
        );
    }

    Ok(())
}
