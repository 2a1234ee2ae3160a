//! Process runner port
//!
//! Launches exactly one child process per call and blocks until it exits.

use crate::error::DotNetError;
use netcall_domain::{ProcessArguments, ProcessResult};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Everything needed to launch one child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    pub program: PathBuf,
    pub arguments: ProcessArguments,
    /// `None` inherits the caller's working directory
    pub working_directory: Option<PathBuf>,
    /// Added on top of the inherited environment
    pub environment: BTreeMap<String, String>,
    /// Capture stdout/stderr instead of inheriting the console
    pub capture_output: bool,
}

impl ProcessRequest {
    pub fn new(program: impl Into<PathBuf>, arguments: ProcessArguments) -> Self {
        Self {
            program: program.into(),
            arguments,
            working_directory: None,
            environment: BTreeMap::new(),
            capture_output: false,
        }
    }

    /// `program args...` with secrets redacted, for logs and dry runs.
    pub fn display_command(&self) -> String {
        if self.arguments.is_empty() {
            self.program.display().to_string()
        } else {
            format!("{} {}", self.program.display(), self.arguments.render_safe())
        }
    }
}

/// Port for running an external process.
///
/// No retries and no timeout: the call returns when the child exits.
pub trait ProcessRunner: Send + Sync {
    /// Run the process and wait for it.
    ///
    /// A non-zero exit is still `Ok`; only a failure to start is an error.
    fn run(&self, request: &ProcessRequest) -> Result<ProcessResult, DotNetError>;
}
