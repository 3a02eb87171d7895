//! Domain types for workspace synchronization.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. Nothing here touches the process table — observing repository
//! state beyond the link-state marker is the sync layer's job.

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Workspace and link state
// ---------------------------------------------------------------------------

/// Whether a workspace already carries version-control metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// A `.git` directory exists at the workspace root.
    Linked,
    /// No version-control metadata yet; bootstrap is required.
    Unlinked,
}

/// A filesystem directory treated as the unit of synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Absolute path to the workspace root on disk.
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Detect link state from the `.git` metadata marker at the root.
    pub fn link_state(&self) -> LinkState {
        if self.root.join(".git").is_dir() {
            LinkState::Linked
        } else {
            LinkState::Unlinked
        }
    }

    /// Directory name of the root, used as the default project name when
    /// originating a new remote.
    pub fn dir_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "workspace".to_string())
    }
}

impl AsRef<Path> for Workspace {
    fn as_ref(&self) -> &Path {
        &self.root
    }
}

// ---------------------------------------------------------------------------
// Remote project visibility
// ---------------------------------------------------------------------------

/// Visibility of a newly created remote project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Parse a free-form console answer. Private iff the lowercased answer
    /// starts with `pr`; everything else (including empty) is public.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().to_ascii_lowercase().starts_with("pr") {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    /// The hosting CLI flag form (`--public` / `--private`).
    pub fn as_flag(&self) -> &'static str {
        match self {
            Visibility::Public => "--public",
            Visibility::Private => "--private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

// ---------------------------------------------------------------------------
// Command result
// ---------------------------------------------------------------------------

/// Exit code plus combined stdout/stderr text of one external invocation.
///
/// Consumed immediately by the caller that issued the command; never
/// persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub code: i32,
    pub output: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
