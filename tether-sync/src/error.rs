//! Error types for tether-sync.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from sync and bootstrap operations.
///
/// Every variant is fatal: advisory conditions (pull or merge conflicts) are
/// outcomes, not errors, and never appear here.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external process could not be launched at all.
    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A fail-fast external command exited non-zero; carries the captured
    /// combined output so the user sees what the tool reported.
    #[error("command failed (exit {code}): {command}\n{output}")]
    CommandFailed {
        command: String,
        code: i32,
        output: String,
    },

    /// A required external tool is not on PATH.
    #[error("required tool '{name}' is not installed")]
    ToolMissing { name: String },

    /// Attach mode was selected but no remote URL was supplied.
    #[error("remote URL must not be empty")]
    EmptyRemoteUrl,

    /// Bootstrap mode selection was neither `1` nor `2`.
    #[error("invalid selection '{choice}'; enter 1 or 2")]
    InvalidMode { choice: String },

    /// Reading a console answer failed.
    #[error("failed to read console input: {0}")]
    Prompt(#[source] std::io::Error),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
