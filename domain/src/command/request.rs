//! Validated command requests

use super::entities::DotNetCommand;
use crate::arguments::{Argument, ProcessArguments};
use crate::core::error::ArgumentError;
use std::path::Path;

/// A command with its required inputs already validated.
///
/// The only way to build one is through the per-command constructors, which
/// reject absent inputs with [`ArgumentError`]. Executors therefore never see
/// a request that would waste a process launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    command: DotNetCommand,
    positionals: Vec<Argument>,
    trailing: ProcessArguments,
}

impl CommandRequest {
    fn new(command: DotNetCommand) -> Self {
        Self {
            command,
            positionals: Vec::new(),
            trailing: ProcessArguments::new(),
        }
    }

    fn with_positional(mut self, argument: Argument) -> Self {
        self.positionals.push(argument);
        self
    }

    fn with_trailing(mut self, arguments: Option<&ProcessArguments>) -> Self {
        if let Some(arguments) = arguments {
            self.trailing.extend_from(arguments);
        }
        self
    }

    /// `dotnet restore [root]`
    pub fn restore(root: Option<&Path>) -> Self {
        let request = Self::new(DotNetCommand::Restore);
        match root.and_then(present_path) {
            Some(root) => request.with_positional(Argument::quoted(root)),
            None => request,
        }
    }

    /// `dotnet build <project>`
    pub fn build(project: &Path) -> Result<Self, ArgumentError> {
        Self::with_required_path(DotNetCommand::Build, "project", project)
    }

    /// `dotnet pack <project>`
    pub fn pack(project: &Path) -> Result<Self, ArgumentError> {
        Self::with_required_path(DotNetCommand::Pack, "project", project)
    }

    /// `dotnet run [--project <project>] [-- <arguments>]`
    pub fn run(project: Option<&Path>, arguments: Option<&ProcessArguments>) -> Self {
        let request = Self::new(DotNetCommand::Run);
        let request = match project.and_then(present_path) {
            Some(project) => request
                .with_positional(Argument::text("--project"))
                .with_positional(Argument::quoted(project)),
            None => request,
        };
        request.with_trailing(arguments)
    }

    /// `dotnet publish <path>`
    pub fn publish(path: &Path) -> Result<Self, ArgumentError> {
        Self::with_required_path(DotNetCommand::Publish, "path", path)
    }

    /// `dotnet test <project> [-- <run settings>]`
    pub fn test(
        project: &Path,
        arguments: Option<&ProcessArguments>,
    ) -> Result<Self, ArgumentError> {
        Ok(Self::with_required_path(DotNetCommand::Test, "project", project)?
            .with_trailing(arguments))
    }

    /// `dotnet clean <project>`
    pub fn clean(project: &Path) -> Result<Self, ArgumentError> {
        Self::with_required_path(DotNetCommand::Clean, "project", project)
    }

    /// `dotnet exec <assembly> [arguments]`
    pub fn execute(
        assembly: &Path,
        arguments: Option<&ProcessArguments>,
    ) -> Result<Self, ArgumentError> {
        Ok(
            Self::with_required_path(DotNetCommand::Execute, "assembly_path", assembly)?
                .with_trailing(arguments),
        )
    }

    /// `dotnet nuget push <package>`
    pub fn nuget_push(package: &Path) -> Result<Self, ArgumentError> {
        Self::with_required_path(DotNetCommand::NuGetPush, "package_path", package)
    }

    /// `dotnet nuget delete <name> [version]`
    pub fn nuget_delete(name: &str, version: Option<&str>) -> Result<Self, ArgumentError> {
        let command = DotNetCommand::NuGetDelete;
        let name = present(name).ok_or(ArgumentError::missing(command, "package_name"))?;
        let request = Self::new(command).with_positional(Argument::quoted(name));
        Ok(match version.and_then(present) {
            Some(version) => request.with_positional(Argument::quoted(version)),
            None => request,
        })
    }

    fn with_required_path(
        command: DotNetCommand,
        argument: &'static str,
        path: &Path,
    ) -> Result<Self, ArgumentError> {
        let value = present_path(path).ok_or(ArgumentError::missing(command, argument))?;
        Ok(Self::new(command).with_positional(Argument::quoted(value)))
    }

    pub fn command(&self) -> DotNetCommand {
        self.command
    }

    pub fn positionals(&self) -> &[Argument] {
        &self.positionals
    }

    pub fn trailing(&self) -> &ProcessArguments {
        &self.trailing
    }
}

fn present(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn present_path(path: &Path) -> Option<String> {
    let value = path.to_string_lossy();
    present(&value).map(|v| v.to_string())
}
