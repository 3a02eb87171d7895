//! External command execution.
//!
//! [`ProcessRunner`] is the only component in the workspace that touches the
//! operating system process table; everything above it is decision logic on
//! [`CommandResult`] values. The [`Runner`] trait exists so that decision
//! logic can be exercised in tests with a scripted fake.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use tether_core::{paint, CommandResult, Style};

use crate::error::SyncError;

/// Executes an external command in a working directory.
pub trait Runner {
    /// Run `argv` with working directory `dir`.
    ///
    /// Standard error is merged into standard output so callers see one
    /// interleaved stream, matching how git reports both progress and error
    /// text. Output is streamed to the console line-by-line unless `silent`
    /// (used for read-only introspection queries whose output is consumed
    /// programmatically).
    ///
    /// A non-zero exit is NOT an error here — callers that must branch on
    /// specific failure text get the [`CommandResult`] back to interpret.
    fn run(&mut self, argv: &[&str], dir: &Path, silent: bool) -> Result<CommandResult, SyncError>;

    /// Fail-fast form: a non-zero exit becomes [`SyncError::CommandFailed`]
    /// carrying the captured combined output.
    fn run_checked(
        &mut self,
        argv: &[&str],
        dir: &Path,
        silent: bool,
    ) -> Result<CommandResult, SyncError> {
        let result = self.run(argv, dir, silent)?;
        if result.success() {
            Ok(result)
        } else {
            Err(SyncError::CommandFailed {
                command: argv.join(" "),
                code: result.code,
                output: result.output,
            })
        }
    }

    /// Whether `name` resolves to an executable on PATH.
    fn has_tool(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }
}

/// Real process spawner used by the CLI.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&mut self, argv: &[&str], dir: &Path, silent: bool) -> Result<CommandResult, SyncError> {
        let command = argv.join(" ");
        if !silent {
            println!("{}", paint(&format!("▶ {command}"), Style::Command));
        }
        tracing::debug!("exec: {command} (in {})", dir.display());

        let mut child = Command::new(argv[0])
            .args(&argv[1..])
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SyncError::Spawn {
                command: command.clone(),
                source,
            })?;

        // Drain stderr on its own thread so a chatty process cannot block on
        // a full pipe while we read stdout.
        let stderr = child.stderr.take();
        let stderr_thread = thread::spawn(move || -> String {
            let mut text = String::new();
            if let Some(stream) = stderr {
                for line in BufReader::new(stream).lines().map_while(Result::ok) {
                    if !silent {
                        println!("{line}");
                    }
                    text.push_str(&line);
                    text.push('\n');
                }
            }
            text
        });

        let mut output = String::new();
        if let Some(stream) = child.stdout.take() {
            for line in BufReader::new(stream).lines().map_while(Result::ok) {
                if !silent {
                    println!("{line}");
                }
                output.push_str(&line);
                output.push('\n');
            }
        }
        output.push_str(&stderr_thread.join().unwrap_or_default());

        let status = child.wait().map_err(|source| SyncError::Spawn {
            command: command.clone(),
            source,
        })?;
        let code = status.code().unwrap_or(-1);
        tracing::debug!("exit {code}: {command}");

        Ok(CommandResult { code, output })
    }
}

/// Fatal precondition check for an external tool.
pub(crate) fn require_tool<R: Runner>(runner: &R, name: &str) -> Result<(), SyncError> {
    if runner.has_tool(name) {
        Ok(())
    } else {
        Err(SyncError::ToolMissing {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn captures_stdout_and_exit_code() {
        let tmp = TempDir::new().unwrap();
        let mut runner = ProcessRunner;
        let result = runner
            .run(&["sh", "-c", "echo hello"], tmp.path(), true)
            .unwrap();
        assert_eq!(result.code, 0);
        assert_eq!(result.output, "hello\n");
    }

    #[test]
    fn merges_stderr_into_output() {
        let tmp = TempDir::new().unwrap();
        let mut runner = ProcessRunner;
        let result = runner
            .run(&["sh", "-c", "echo out; echo err >&2"], tmp.path(), true)
            .unwrap();
        assert!(result.output.contains("out"));
        assert!(result.output.contains("err"));
    }

    #[test]
    fn non_zero_exit_is_returned_not_raised() {
        let tmp = TempDir::new().unwrap();
        let mut runner = ProcessRunner;
        let result = runner.run(&["sh", "-c", "exit 3"], tmp.path(), true).unwrap();
        assert_eq!(result.code, 3);
    }

    #[test]
    fn run_checked_fails_on_non_zero_exit() {
        let tmp = TempDir::new().unwrap();
        let mut runner = ProcessRunner;
        let err = runner
            .run_checked(&["sh", "-c", "echo broken; exit 1"], tmp.path(), true)
            .unwrap_err();
        match err {
            SyncError::CommandFailed { code, output, .. } => {
                assert_eq!(code, 1);
                assert!(output.contains("broken"));
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn runs_in_the_given_working_directory() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("probe.txt"), "x").unwrap();
        let mut runner = ProcessRunner;
        let result = runner.run(&["ls"], tmp.path(), true).unwrap();
        assert!(result.output.contains("probe.txt"));
    }

    #[test]
    fn spawn_failure_is_reported() {
        let tmp = TempDir::new().unwrap();
        let mut runner = ProcessRunner;
        let err = runner
            .run(&["definitely-not-a-real-binary-7f3a"], tmp.path(), true)
            .unwrap_err();
        assert!(matches!(err, SyncError::Spawn { .. }));
    }

    #[test]
    fn has_tool_finds_sh() {
        let runner = ProcessRunner;
        assert!(runner.has_tool("sh"));
        assert!(!runner.has_tool("definitely-not-a-real-binary-7f3a"));
    }
}
