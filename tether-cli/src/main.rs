//! Tether — workspace-to-remote synchronization CLI.
//!
//! # Usage
//!
//! ```text
//! tether [MESSAGE]
//! ```
//!
//! Run inside a workspace directory. If the workspace is already linked to a
//! remote, local changes are committed (with `MESSAGE` or a timestamped
//! default), remote changes are integrated, and the branch is published. If
//! it is not linked yet, an interactive bootstrap either creates a fresh
//! remote project or attaches to an existing one.
//!
//! Exit code 0 covers both full success and handled advisory paths (pull or
//! merge conflicts reported with follow-up guidance); every fatal condition
//! exits 1 with the captured tool output.

mod console;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use console::ConsolePrompt;
use tether_core::{paint, Style, Workspace};
use tether_sync::{pipeline, ProcessRunner, RunOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "tether",
    version,
    about = "Sync a workspace directory with its remote repository",
    long_about = None,
)]
struct Cli {
    /// Commit message for this run (defaults to a timestamped message).
    message: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let root: PathBuf =
        std::env::current_dir().context("could not determine working directory")?;
    let workspace = Workspace::new(root);

    println!("{}", paint("=== tether — workspace sync ===", Style::Header));

    let mut runner = ProcessRunner;
    let mut prompt = ConsolePrompt;
    let outcome = pipeline::run(&mut runner, &mut prompt, &workspace, cli.message.as_deref())?;
    report(outcome);
    Ok(())
}

/// Print closing guidance for advisory outcomes. Success banners are already
/// printed by the workflow that reached them.
fn report(outcome: RunOutcome) {
    match outcome {
        RunOutcome::Synced | RunOutcome::Created | RunOutcome::Attached => {}
        RunOutcome::PullConflict => {
            println!(
                "{}",
                paint("\n✗ Pull stopped on conflicts — resolve them manually.", Style::Error)
            );
            println!(
                "{}",
                paint(
                    "After fixing each file: git add <file> && git rebase --continue",
                    Style::Warn,
                )
            );
            println!(
                "{}",
                paint("To give up on the integration: git rebase --abort", Style::Warn)
            );
        }
        RunOutcome::MergeConflict => {
            println!(
                "{}",
                paint(
                    "\n⚠ The merge hit conflicts — open the affected files and resolve them.",
                    Style::Warn,
                )
            );
            println!(
                "{}",
                paint(
                    "Then run: git add . && git commit -m 'Merge fix' && git push",
                    Style::Warn,
                )
            );
        }
    }
}
