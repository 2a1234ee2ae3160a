//! Process outcome value objects
//!
//! [`ProcessResult`] is what a runner hands back after waiting for the
//! child; [`CommandOutcome`] is what an executor reports to its caller once
//! the exit code has been checked.

use crate::command::DotNetCommand;
use serde::{Deserialize, Serialize};

/// Exit code reported when the child terminated without one (killed by a signal).
pub const NO_EXIT_CODE: i32 = -1;

/// Raw result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub exit_code: i32,
    /// Captured stdout; `None` when output was streamed to the console
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    /// Captured stderr; `None` when output was streamed to the console
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl ProcessResult {
    pub fn exited(exit_code: i32) -> Self {
        Self {
            exit_code,
            stdout: None,
            stderr: None,
        }
    }

    pub fn with_output(mut self, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        self.stdout = Some(stdout.into());
        self.stderr = Some(stderr.into());
        self
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Successful command invocation as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub command: DotNetCommand,
    /// Resolved tool path
    pub program: String,
    /// Command line with secrets redacted
    pub command_line: String,
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    pub duration_ms: u64,
}

impl CommandOutcome {
    pub fn new(
        command: DotNetCommand,
        program: impl Into<String>,
        command_line: impl Into<String>,
        result: ProcessResult,
        duration_ms: u64,
    ) -> Self {
        Self {
            command,
            program: program.into(),
            command_line: command_line.into(),
            exit_code: result.exit_code,
            stdout: result.stdout,
            stderr: result.stderr,
            duration_ms,
        }
    }
}
