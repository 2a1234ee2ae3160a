//! Process runner backed by `std::process`

use netcall_application::{DotNetError, ProcessRequest, ProcessRunner};
use netcall_domain::{NO_EXIT_CODE, ProcessResult};
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Spawns the tool as a child process and blocks until it exits.
///
/// Without capture, the child shares this process's stdin/stdout/stderr, so
/// build output and prompts stream straight to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(request: &ProcessRequest) -> Command {
        let mut cmd = Command::new(&request.program);
        cmd.args(request.arguments.argv());

        if let Some(dir) = &request.working_directory {
            cmd.current_dir(dir);
        }
        cmd.envs(&request.environment);
        cmd.stdin(Stdio::inherit());
        cmd
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, request: &ProcessRequest) -> Result<ProcessResult, DotNetError> {
        let mut cmd = Self::command(request);
        let start_error = |source| DotNetError::ProcessStart {
            program: request.program.clone(),
            source,
        };

        if request.capture_output {
            let output = cmd.output().map_err(start_error)?;
            let result = ProcessResult::exited(exit_code(output.status)).with_output(
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr),
            );
            debug!(
                "Captured {} bytes stdout, {} bytes stderr",
                output.stdout.len(),
                output.stderr.len()
            );
            Ok(result)
        } else {
            let status = cmd.status().map_err(start_error)?;
            Ok(ProcessResult::exited(exit_code(status)))
        }
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(NO_EXIT_CODE)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use netcall_domain::ProcessArguments;
    use std::path::PathBuf;

    fn sh(script: &str) -> ProcessRequest {
        let mut args = ProcessArguments::new();
        args.append("-c").append_quoted(script);
        let mut request = ProcessRequest::new("sh", args);
        request.capture_output = true;
        request
    }

    #[test]
    fn test_captures_stdout_and_stderr() {
        let result = SystemProcessRunner
            .run(&sh("echo hello; echo oops >&2"))
            .unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout.as_deref(), Some("hello\n"));
        assert_eq!(result.stderr.as_deref(), Some("oops\n"));
    }

    #[test]
    fn test_non_zero_exit_is_not_an_error() {
        let result = SystemProcessRunner.run(&sh("exit 3")).unwrap();
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn test_uncaptured_run_reports_exit_code_only() {
        let mut request = sh("exit 0");
        request.capture_output = false;

        let result = SystemProcessRunner.run(&request).unwrap();
        assert_eq!(result, ProcessResult::exited(0));
    }

    #[test]
    fn test_killed_process_reports_no_exit_code() {
        let result = SystemProcessRunner.run(&sh("kill -9 $$")).unwrap();
        assert_eq!(result.exit_code, NO_EXIT_CODE);
    }

    #[test]
    fn test_arguments_reach_the_child_unquoted() {
        let mut args = ProcessArguments::new();
        args.append("-c")
            .append_quoted("printf '%s|' \"$@\"")
            .append("sh")
            .append_quoted("two words")
            .append_quoted("$HOME");
        let mut request = ProcessRequest::new("sh", args);
        request.capture_output = true;

        let result = SystemProcessRunner.run(&request).unwrap();
        assert_eq!(result.stdout.as_deref(), Some("two words|$HOME|"));
    }

    #[test]
    fn test_working_directory_and_environment() {
        let dir = tempfile::tempdir().unwrap();
        let mut request = sh("pwd; echo \"$NETCALL_RUNNER_TEST\"");
        request.working_directory = Some(dir.path().to_path_buf());
        request
            .environment
            .insert("NETCALL_RUNNER_TEST".to_string(), "set".to_string());

        let result = SystemProcessRunner.run(&request).unwrap();
        let stdout = result.stdout.unwrap();
        let name = dir.path().file_name().unwrap().to_str().unwrap();
        assert!(stdout.contains(name));
        assert!(stdout.ends_with("set\n"));
    }

    #[test]
    fn test_missing_program_is_process_start_error() {
        let request = ProcessRequest::new(
            PathBuf::from("/nonexistent/netcall-test/dotnet"),
            ProcessArguments::new(),
        );

        match SystemProcessRunner.run(&request) {
            Err(DotNetError::ProcessStart { program, .. }) => {
                assert_eq!(program, PathBuf::from("/nonexistent/netcall-test/dotnet"));
            }
            other => panic!("expected ProcessStart, got {:?}", other),
        }
    }
}
