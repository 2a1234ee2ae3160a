//! Errors surfaced by command executors

use netcall_domain::{ArgumentError, DotNetCommand};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a dotnet command invocation.
#[derive(Error, Debug)]
pub enum DotNetError {
    /// A required input was absent; nothing was launched.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("could not find '{tool}' (searched: {})", display_paths(searched))]
    ToolNotFound { tool: String, searched: Vec<PathBuf> },

    #[error("failed to start '{}': {source}", program.display())]
    ProcessStart {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dotnet {command} failed with exit code {exit_code}")]
    ToolExecution {
        tool: String,
        command: DotNetCommand,
        exit_code: i32,
        /// Captured stderr, when output capture was on
        stderr: Option<String>,
    },
}

impl DotNetError {
    /// Exit code of the failed tool, if it ran at all.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            DotNetError::ToolExecution { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }

    pub fn is_argument_error(&self) -> bool {
        matches!(self, DotNetError::Argument(_))
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_error_is_transparent() {
        let err: DotNetError = ArgumentError::missing(DotNetCommand::Build, "project").into();
        assert!(err.is_argument_error());
        assert_eq!(
            err.to_string(),
            "dotnet build: required argument 'project' is missing"
        );
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_tool_not_found_lists_candidates() {
        let err = DotNetError::ToolNotFound {
            tool: "dotnet".to_string(),
            searched: vec![PathBuf::from("/opt/dotnet/dotnet"), PathBuf::from("PATH")],
        };
        assert_eq!(
            err.to_string(),
            "could not find 'dotnet' (searched: /opt/dotnet/dotnet, PATH)"
        );
    }

    #[test]
    fn test_tool_execution_exit_code() {
        let err = DotNetError::ToolExecution {
            tool: "/usr/bin/dotnet".to_string(),
            command: DotNetCommand::NuGetPush,
            exit_code: 1,
            stderr: None,
        };
        assert_eq!(err.exit_code(), Some(1));
        assert_eq!(err.to_string(), "dotnet nuget push failed with exit code 1");
    }
}
