//! Domain error types

use crate::command::DotNetCommand;
use thiserror::Error;

/// A required input for a command was absent.
///
/// Raised while building a [`CommandRequest`](crate::command::CommandRequest),
/// so it always surfaces before any tool lookup or process launch.
/// "Absent" covers empty and whitespace-only values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("dotnet {command}: required argument '{argument}' is missing")]
pub struct ArgumentError {
    /// Command whose validation failed
    pub command: DotNetCommand,
    /// Name of the missing argument (e.g. "project", "package_name")
    pub argument: &'static str,
}

impl ArgumentError {
    pub fn missing(command: DotNetCommand, argument: &'static str) -> Self {
        Self { command, argument }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_error_display() {
        let error = ArgumentError::missing(DotNetCommand::Build, "project");
        assert_eq!(
            error.to_string(),
            "dotnet build: required argument 'project' is missing"
        );
    }

    #[test]
    fn test_argument_error_display_multi_word_verb() {
        let error = ArgumentError::missing(DotNetCommand::NuGetDelete, "package_name");
        assert_eq!(
            error.to_string(),
            "dotnet nuget delete: required argument 'package_name' is missing"
        );
    }
}
