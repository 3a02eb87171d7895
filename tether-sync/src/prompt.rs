//! Blocking console questions.
//!
//! The trait keeps workflow logic testable with scripted answers; the real
//! stdin-backed implementation lives in the CLI crate.

use crate::error::SyncError;

/// A synchronous blocking question-and-answer source.
pub trait Prompt {
    /// Display `question` and return the user's answer, trimmed.
    fn ask(&mut self, question: &str) -> Result<String, SyncError>;
}
