//! Scripted fakes for exercising workflow decision logic without spawning
//! processes or reading stdin.

use std::collections::VecDeque;
use std::path::Path;

use tether_core::CommandResult;

use crate::error::SyncError;
use crate::prompt::Prompt;
use crate::runner::Runner;

/// A [`Runner`] that answers from prefix-matched rules and records every
/// invocation.
///
/// Rules are consulted in registration order and the first matching prefix
/// wins, so register the more specific argv (e.g. `git push --set-upstream`)
/// before the general one (`git push`). Unmatched commands succeed with
/// empty output.
pub(crate) struct ScriptedRunner {
    rules: Vec<(Vec<String>, i32, String)>,
    missing_tools: Vec<String>,
    pub calls: Vec<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            missing_tools: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Script the response for any command whose argv starts with `prefix`.
    pub fn on(mut self, prefix: &[&str], code: i32, output: &str) -> Self {
        self.rules.push((
            prefix.iter().map(|s| s.to_string()).collect(),
            code,
            output.to_string(),
        ));
        self
    }

    /// Make `has_tool(name)` report absence.
    pub fn without_tool(mut self, name: &str) -> Self {
        self.missing_tools.push(name.to_string());
        self
    }

    /// Number of recorded invocations whose argv starts with `prefix`.
    pub fn calls_matching(&self, prefix: &[&str]) -> usize {
        self.calls
            .iter()
            .filter(|argv| starts_with(argv, prefix))
            .count()
    }

    /// Index of the first recorded invocation matching `prefix`.
    pub fn first_call_index(&self, prefix: &[&str]) -> Option<usize> {
        self.calls.iter().position(|argv| starts_with(argv, prefix))
    }
}

fn starts_with(argv: &[String], prefix: &[&str]) -> bool {
    argv.len() >= prefix.len() && argv.iter().zip(prefix).all(|(a, p)| a == p)
}

impl Runner for ScriptedRunner {
    fn run(&mut self, argv: &[&str], _dir: &Path, _silent: bool) -> Result<CommandResult, SyncError> {
        self.calls.push(argv.iter().map(|s| s.to_string()).collect());
        for (prefix, code, output) in &self.rules {
            let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
            if argv.len() >= prefix.len() && argv[..prefix.len()] == prefix[..] {
                return Ok(CommandResult {
                    code: *code,
                    output: output.clone(),
                });
            }
        }
        Ok(CommandResult {
            code: 0,
            output: String::new(),
        })
    }

    fn has_tool(&self, name: &str) -> bool {
        !self.missing_tools.iter().any(|t| t == name)
    }
}

/// A [`Prompt`] that replays queued answers.
pub(crate) struct ScriptedPrompt {
    answers: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, _question: &str) -> Result<String, SyncError> {
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
