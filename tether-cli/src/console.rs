//! Stdin-backed prompt implementation.

use std::io::{self, BufRead, Write};

use tether_sync::{Prompt, SyncError};

/// Synchronous blocking console questions; answers are trimmed.
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn ask(&mut self, question: &str) -> Result<String, SyncError> {
        print!("{question}");
        io::stdout().flush().map_err(SyncError::Prompt)?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(SyncError::Prompt)?;
        Ok(answer.trim().to_string())
    }
}
