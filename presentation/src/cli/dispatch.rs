//! Routes a parsed subcommand to its executor

use super::commands::{Command, NuGetCommand};
use netcall_application::{DotNetContext, DotNetError, ProcessRunner, ToolLocator};
use netcall_domain::{CommandOutcome, CommonSettings, ProcessArguments};
use std::path::PathBuf;

/// Run `command` through `ctx`.
///
/// Absent required positionals are passed on as empty values so the
/// executor reports them as argument errors.
pub fn dispatch<L: ToolLocator, R: ProcessRunner>(
    ctx: &DotNetContext<L, R>,
    command: Command,
    common: CommonSettings,
) -> Result<CommandOutcome, DotNetError> {
    match command {
        Command::Restore(mut args) => {
            let root = args.root.take();
            ctx.restore(root.as_deref(), Some(&args.into_settings(common)))
        }
        Command::Build(mut args) => {
            let project = required(args.project.take());
            ctx.build(&project, Some(&args.into_settings(common)))
        }
        Command::Pack(mut args) => {
            let project = required(args.project.take());
            ctx.pack(&project, Some(&args.into_settings(common)))
        }
        Command::Run(mut args) => {
            let project = args.project.take();
            let arguments = trailing(std::mem::take(&mut args.args));
            ctx.run(
                project.as_deref(),
                Some(&arguments),
                Some(&args.into_settings(common)),
            )
        }
        Command::Publish(mut args) => {
            let path = required(args.path.take());
            ctx.publish(&path, Some(&args.into_settings(common)))
        }
        Command::Test(mut args) => {
            let project = required(args.project.take());
            let arguments = trailing(std::mem::take(&mut args.args));
            ctx.test(&project, Some(&arguments), Some(&args.into_settings(common)))
        }
        Command::Clean(mut args) => {
            let project = required(args.project.take());
            ctx.clean(&project, Some(&args.into_settings(common)))
        }
        Command::Exec(mut args) => {
            let assembly = required(args.assembly.take());
            let arguments = trailing(std::mem::take(&mut args.args));
            ctx.execute(
                &assembly,
                Some(&arguments),
                Some(&args.into_settings(common)),
            )
        }
        Command::Nuget { command } => match command {
            NuGetCommand::Push(mut args) => {
                let package = required(args.package.take());
                ctx.nuget_push(&package, Some(&args.into_settings(common)))
            }
            NuGetCommand::Delete(mut args) => {
                let name = args.name.take().unwrap_or_default();
                let version = args.version.take();
                ctx.nuget_delete(
                    &name,
                    version.as_deref(),
                    Some(&args.into_settings(common)),
                )
            }
        },
    }
}

fn required(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_default()
}

fn trailing(args: Vec<String>) -> ProcessArguments {
    args.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::Cli;
    use clap::Parser;
    use netcall_application::ProcessRequest;
    use netcall_domain::ProcessResult;
    use std::path::Path;
    use std::sync::Mutex;

    struct FixedLocator;

    impl ToolLocator for FixedLocator {
        fn resolve(
            &self,
            _tool: &str,
            override_path: Option<&Path>,
        ) -> Result<PathBuf, DotNetError> {
            Ok(override_path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("dotnet")))
        }
    }

    #[derive(Default)]
    struct RecordingRunner {
        calls: Mutex<Vec<ProcessRequest>>,
    }

    impl ProcessRunner for RecordingRunner {
        fn run(&self, request: &ProcessRequest) -> Result<ProcessResult, DotNetError> {
            self.calls.lock().unwrap().push(request.clone());
            Ok(ProcessResult::exited(0))
        }
    }

    fn run_cli(args: &[&str]) -> (Result<CommandOutcome, DotNetError>, Vec<ProcessRequest>) {
        let cli = Cli::try_parse_from(args).unwrap();
        let ctx = DotNetContext::new(FixedLocator, RecordingRunner::default());
        let common = cli.global.common_settings(CommonSettings::default());
        let command = cli.command.unwrap();
        let result = dispatch(&ctx, command, common);
        let calls = ctx.runner().calls.lock().unwrap().clone();
        (result, calls)
    }

    #[test]
    fn test_build_end_to_end() {
        let (result, calls) = run_cli(&["netcall", "build", "./src/App", "-o", "./artifacts"]);

        assert!(result.is_ok());
        assert_eq!(
            calls[0].arguments.tokens(),
            vec!["build", "./src/App", "--output", "./artifacts"]
        );
    }

    #[test]
    fn test_missing_project_is_argument_error() {
        let (result, calls) = run_cli(&["netcall", "pack"]);

        assert!(result.unwrap_err().is_argument_error());
        assert!(calls.is_empty());
    }

    #[test]
    fn test_test_command_with_run_settings() {
        let (_, calls) = run_cli(&[
            "netcall",
            "test",
            "tests/Unit.csproj",
            "--filter",
            "Category=Unit",
            "--",
            "RunConfiguration.MaxCpuCount=1",
        ]);

        assert_eq!(
            calls[0].arguments.tokens(),
            vec![
                "test",
                "tests/Unit.csproj",
                "--filter",
                "Category=Unit",
                "--",
                "RunConfiguration.MaxCpuCount=1"
            ]
        );
    }

    #[test]
    fn test_nuget_push_with_global_flags() {
        let (result, calls) = run_cli(&[
            "netcall",
            "--tool-path",
            "/opt/dotnet/dotnet",
            "-C",
            "out",
            "nuget",
            "push",
            "App.1.0.0.nupkg",
            "-s",
            "https://api.nuget.org/v3/index.json",
            "-k",
            "oy2secret",
        ]);

        let outcome = result.unwrap();
        assert_eq!(outcome.program, "/opt/dotnet/dotnet");
        assert!(!outcome.command_line.contains("oy2secret"));
        assert_eq!(calls[0].working_directory, Some(PathBuf::from("out")));
        assert_eq!(
            calls[0].arguments.tokens()[..3],
            ["nuget", "push", "App.1.0.0.nupkg"]
        );
    }

    #[test]
    fn test_nuget_delete_missing_name() {
        let (result, calls) = run_cli(&["netcall", "nuget", "delete"]);

        assert!(result.unwrap_err().is_argument_error());
        assert!(calls.is_empty());
    }
}
