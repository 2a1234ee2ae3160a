//! Process runner that prints instead of spawning

use netcall_application::{DotNetError, ProcessRequest, ProcessRunner};
use netcall_domain::ProcessResult;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::warn;

/// Prints each command line (secrets redacted) and reports success.
///
/// Backs `netcall --dry-run`. Nothing is launched, so the exit code is
/// always 0 and captured output is empty.
pub struct DryRunProcessRunner {
    out: Mutex<Box<dyn Write + Send>>,
}

impl DryRunProcessRunner {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for DryRunProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for DryRunProcessRunner {
    fn run(&self, request: &ProcessRequest) -> Result<ProcessResult, DotNetError> {
        let mut line = String::new();
        if let Some(dir) = &request.working_directory {
            line.push_str(&format!("(cd {}) ", dir.display()));
        }
        for (name, value) in &request.environment {
            line.push_str(&format!("{}={} ", name, value));
        }
        line.push_str(&request.display_command());

        match self.out.lock() {
            Ok(mut out) => {
                if let Err(e) = writeln!(out, "{}", line).and_then(|()| out.flush()) {
                    warn!("Could not print dry-run command line: {}", e);
                }
            }
            Err(_) => warn!("Dry-run output is unavailable: {}", line),
        }

        let result = ProcessResult::exited(0);
        Ok(if request.capture_output {
            result.with_output("", "")
        } else {
            result
        })
    }
}
