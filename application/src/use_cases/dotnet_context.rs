//! dotnet command executors
//!
//! One shared routine drives every command:
//!
//! ```text
//! CommandRequest ──▶ default settings ──▶ locate tool ──▶ serialize ──▶ run ──▶ exit code check
//!   (validated)        (if omitted)       (override first)                        0 → CommandOutcome
//!                                                                                 ≠0 → ToolExecution
//! ```
//!
//! The per-command aliases ([`DotNetContext::build`], [`DotNetContext::nuget_push`], ...)
//! only build the request; building it is where required inputs are checked,
//! so an [`ArgumentError`](netcall_domain::ArgumentError) never reaches the
//! locator or the runner.

use crate::error::DotNetError;
use crate::ports::invocation_logger::{InvocationEvent, InvocationLogger, NoInvocationLogger};
use crate::ports::process_runner::{ProcessRequest, ProcessRunner};
use crate::ports::tool_locator::ToolLocator;
use netcall_domain::{
    BuildSettings, CleanSettings, CommandOutcome, CommandRequest, CommandSettings, DOTNET_TOOL,
    ExecuteSettings, NuGetDeleteSettings, NuGetPushSettings, PackSettings, ProcessArguments,
    PublishSettings, RestoreSettings, RunSettings, TestSettings, serialize,
};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Explicit execution context for dotnet commands.
///
/// Holds the adapters every invocation needs; there is no global state, so
/// several contexts (e.g. a real one and a dry-run one) can coexist.
pub struct DotNetContext<L: ToolLocator, R: ProcessRunner> {
    locator: L,
    runner: R,
    logger: Arc<dyn InvocationLogger>,
}

impl<L: ToolLocator, R: ProcessRunner> DotNetContext<L, R> {
    pub fn new(locator: L, runner: R) -> Self {
        Self {
            locator,
            runner,
            logger: Arc::new(NoInvocationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn InvocationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    // ==================== Command Aliases ====================

    /// `dotnet restore [root]`
    pub fn restore(
        &self,
        root: Option<&Path>,
        settings: Option<&RestoreSettings>,
    ) -> Result<CommandOutcome, DotNetError> {
        self.invoke(CommandRequest::restore(root), settings)
    }

    /// `dotnet build <project>`
    pub fn build(
        &self,
        project: &Path,
        settings: Option<&BuildSettings>,
    ) -> Result<CommandOutcome, DotNetError> {
        self.invoke(CommandRequest::build(project)?, settings)
    }

    /// `dotnet pack <project>`
    pub fn pack(
        &self,
        project: &Path,
        settings: Option<&PackSettings>,
    ) -> Result<CommandOutcome, DotNetError> {
        self.invoke(CommandRequest::pack(project)?, settings)
    }

    /// `dotnet run [--project <project>] [-- <arguments>]`
    pub fn run(
        &self,
        project: Option<&Path>,
        arguments: Option<&ProcessArguments>,
        settings: Option<&RunSettings>,
    ) -> Result<CommandOutcome, DotNetError> {
        self.invoke(CommandRequest::run(project, arguments), settings)
    }

    /// `dotnet publish <path>`
    pub fn publish(
        &self,
        path: &Path,
        settings: Option<&PublishSettings>,
    ) -> Result<CommandOutcome, DotNetError> {
        self.invoke(CommandRequest::publish(path)?, settings)
    }

    /// `dotnet test <project> [-- <run settings>]`
    pub fn test(
        &self,
        project: &Path,
        arguments: Option<&ProcessArguments>,
        settings: Option<&TestSettings>,
    ) -> Result<CommandOutcome, DotNetError> {
        self.invoke(CommandRequest::test(project, arguments)?, settings)
    }

    /// `dotnet clean <project>`
    pub fn clean(
        &self,
        project: &Path,
        settings: Option<&CleanSettings>,
    ) -> Result<CommandOutcome, DotNetError> {
        self.invoke(CommandRequest::clean(project)?, settings)
    }

    /// `dotnet exec [host options] <assembly> [arguments]`
    pub fn execute(
        &self,
        assembly: &Path,
        arguments: Option<&ProcessArguments>,
        settings: Option<&ExecuteSettings>,
    ) -> Result<CommandOutcome, DotNetError> {
        self.invoke(CommandRequest::execute(assembly, arguments)?, settings)
    }

    /// `dotnet nuget push <package>`
    pub fn nuget_push(
        &self,
        package: &Path,
        settings: Option<&NuGetPushSettings>,
    ) -> Result<CommandOutcome, DotNetError> {
        self.invoke(CommandRequest::nuget_push(package)?, settings)
    }

    /// `dotnet nuget delete <name> [version]`
    pub fn nuget_delete(
        &self,
        name: &str,
        version: Option<&str>,
        settings: Option<&NuGetDeleteSettings>,
    ) -> Result<CommandOutcome, DotNetError> {
        self.invoke(CommandRequest::nuget_delete(name, version)?, settings)
    }

    // ==================== Shared Routine ====================

    /// Run a validated request; omitted settings mean "every option unset".
    pub fn invoke<S: CommandSettings>(
        &self,
        request: CommandRequest,
        settings: Option<&S>,
    ) -> Result<CommandOutcome, DotNetError> {
        let defaults;
        let settings = match settings {
            Some(settings) => settings,
            None => {
                defaults = S::default();
                &defaults
            }
        };
        let command = request.command();
        let common = settings.common();

        let program = self
            .locator
            .resolve(DOTNET_TOOL, common.tool_path.as_deref())?;
        let arguments = serialize(&request, settings);

        // A pending confirmation prompt has to reach the terminal.
        let prompts = command.may_prompt() && settings.interactive_prompt();
        if prompts && common.capture_output {
            debug!("Output capture disabled: dotnet {} may prompt", command);
        }

        let process = ProcessRequest {
            program,
            arguments,
            working_directory: common.working_directory.clone(),
            environment: common.environment_variables.clone(),
            capture_output: common.capture_output && !prompts,
        };
        let command_line = process.arguments.render_safe();

        info!("Running dotnet {}", command);
        debug!("Command line: {}", process.display_command());

        let started = Instant::now();
        let result = self.runner.run(&process)?;
        let duration_ms = started.elapsed().as_millis() as u64;

        let succeeded = result.success();
        self.logger.log(InvocationEvent::new(
            if succeeded {
                "command_completed"
            } else {
                "command_failed"
            },
            json!({
                "command": command,
                "program": process.program.display().to_string(),
                "command_line": command_line,
                "working_directory": process
                    .working_directory
                    .as_ref()
                    .map(|p| p.display().to_string()),
                "exit_code": result.exit_code,
                "duration_ms": duration_ms,
            }),
        ));

        if !succeeded {
            warn!(
                "dotnet {} exited with code {} after {}ms",
                command, result.exit_code, duration_ms
            );
            return Err(DotNetError::ToolExecution {
                tool: process.program.display().to_string(),
                command,
                exit_code: result.exit_code,
                stderr: result.stderr,
            });
        }

        info!("dotnet {} finished in {}ms", command, duration_ms);
        Ok(CommandOutcome::new(
            command,
            process.program.display().to_string(),
            command_line,
            result,
            duration_ms,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netcall_domain::{DotNetCommand, ProcessResult};
    use std::path::PathBuf;
    use std::sync::Mutex;

    // ==================== Mock Ports ====================

    struct StaticLocator {
        path: PathBuf,
        calls: Mutex<Vec<Option<PathBuf>>>,
    }

    impl StaticLocator {
        fn new(path: &str) -> Self {
            Self {
                path: PathBuf::from(path),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl ToolLocator for StaticLocator {
        fn resolve(
            &self,
            _tool: &str,
            override_path: Option<&Path>,
        ) -> Result<PathBuf, DotNetError> {
            self.calls
                .lock()
                .unwrap()
                .push(override_path.map(Path::to_path_buf));
            Ok(override_path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.path.clone()))
        }
    }

    struct MissingLocator;

    impl ToolLocator for MissingLocator {
        fn resolve(
            &self,
            tool: &str,
            _override_path: Option<&Path>,
        ) -> Result<PathBuf, DotNetError> {
            Err(DotNetError::ToolNotFound {
                tool: tool.to_string(),
                searched: vec![PathBuf::from("PATH")],
            })
        }
    }

    struct RecordingRunner {
        exit_code: i32,
        stderr: Option<String>,
        calls: Mutex<Vec<ProcessRequest>>,
    }

    impl RecordingRunner {
        fn exiting_with(exit_code: i32) -> Self {
            Self {
                exit_code,
                stderr: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<ProcessRequest> {
            self.calls.lock().unwrap().clone()
        }

        fn only_tokens(&self) -> Vec<String> {
            let calls = self.calls();
            assert_eq!(calls.len(), 1);
            calls[0].arguments.tokens()
        }
    }

    impl ProcessRunner for RecordingRunner {
        fn run(&self, request: &ProcessRequest) -> Result<ProcessResult, DotNetError> {
            self.calls.lock().unwrap().push(request.clone());
            let mut result = ProcessResult::exited(self.exit_code);
            if request.capture_output {
                result = result.with_output("", self.stderr.clone().unwrap_or_default());
            }
            Ok(result)
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<InvocationEvent>>,
    }

    impl InvocationLogger for RecordingLogger {
        fn log(&self, event: InvocationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn context(exit_code: i32) -> DotNetContext<StaticLocator, RecordingRunner> {
        DotNetContext::new(
            StaticLocator::new("/usr/share/dotnet/dotnet"),
            RecordingRunner::exiting_with(exit_code),
        )
    }

    // ==================== Validation ====================

    #[test]
    fn test_missing_required_input_touches_nothing() {
        let ctx = context(0);
        let blank = Path::new("  ");

        let results = vec![
            ctx.build(blank, None),
            ctx.pack(blank, None),
            ctx.publish(blank, None),
            ctx.test(blank, None, None),
            ctx.clean(blank, None),
            ctx.execute(blank, None, None),
            ctx.nuget_push(blank, None),
            ctx.nuget_delete("", Some("1.0.0"), None),
        ];

        for result in results {
            assert!(result.unwrap_err().is_argument_error());
        }
        assert_eq!(ctx.locator().call_count(), 0);
        assert!(ctx.runner().calls().is_empty());
    }

    #[test]
    fn test_argument_error_names_the_input() {
        let ctx = context(0);
        match ctx.nuget_push(Path::new(""), None) {
            Err(DotNetError::Argument(err)) => {
                assert_eq!(err.command, DotNetCommand::NuGetPush);
                assert_eq!(err.argument, "package_path");
            }
            other => panic!("expected ArgumentError, got {:?}", other),
        }
    }

    // ==================== Execution ====================

    #[test]
    fn test_build_success() {
        let ctx = context(0);
        let settings = BuildSettings::default().with_output_directory("./artifacts");

        let outcome = ctx.build(Path::new("./src/App"), Some(&settings)).unwrap();

        assert_eq!(
            ctx.runner().only_tokens(),
            vec!["build", "./src/App", "--output", "./artifacts"]
        );
        assert_eq!(outcome.command, DotNetCommand::Build);
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.program, "/usr/share/dotnet/dotnet");
        assert_eq!(outcome.command_line, "build ./src/App --output ./artifacts");
    }

    #[test]
    fn test_non_zero_exit_is_tool_execution_failure() {
        let ctx = context(1);
        let settings = BuildSettings::default().with_output_directory("./artifacts");

        let err = ctx
            .build(Path::new("./src/App"), Some(&settings))
            .unwrap_err();

        match err {
            DotNetError::ToolExecution {
                command, exit_code, ..
            } => {
                assert_eq!(command, DotNetCommand::Build);
                assert_eq!(exit_code, 1);
            }
            other => panic!("expected ToolExecution, got {:?}", other),
        }
        assert_eq!(ctx.runner().calls().len(), 1);
    }

    #[test]
    fn test_failure_carries_captured_stderr() {
        let runner = RecordingRunner {
            exit_code: 1,
            stderr: Some("error NU1101: Unable to find package".to_string()),
            calls: Mutex::new(Vec::new()),
        };
        let ctx = DotNetContext::new(StaticLocator::new("dotnet"), runner);
        let mut settings = RestoreSettings::default();
        settings.common.capture_output = true;

        match ctx.restore(None, Some(&settings)) {
            Err(DotNetError::ToolExecution { stderr, .. }) => {
                assert_eq!(
                    stderr.as_deref(),
                    Some("error NU1101: Unable to find package")
                );
            }
            other => panic!("expected ToolExecution, got {:?}", other),
        }
    }

    #[test]
    fn test_omitted_settings_use_defaults() {
        let ctx = context(0);
        ctx.clean(Path::new("App.sln"), None).unwrap();

        assert_eq!(ctx.runner().only_tokens(), vec!["clean", "App.sln"]);
        let request = &ctx.runner().calls()[0];
        assert!(!request.capture_output);
        assert!(request.working_directory.is_none());
        assert!(request.environment.is_empty());
    }

    #[test]
    fn test_common_settings_flow_into_process_request() {
        let ctx = context(0);
        let mut settings = PackSettings::default();
        settings.common = settings
            .common
            .with_tool_path("/opt/dotnet/dotnet")
            .with_working_directory("/work")
            .with_environment_variable("DOTNET_CLI_TELEMETRY_OPTOUT", "1")
            .with_capture(true);

        ctx.pack(Path::new("Lib.csproj"), Some(&settings)).unwrap();

        let calls = ctx.locator().calls.lock().unwrap().clone();
        assert_eq!(calls, vec![Some(PathBuf::from("/opt/dotnet/dotnet"))]);

        let request = &ctx.runner().calls()[0];
        assert_eq!(request.program, PathBuf::from("/opt/dotnet/dotnet"));
        assert_eq!(request.working_directory, Some(PathBuf::from("/work")));
        assert_eq!(
            request.environment.get("DOTNET_CLI_TELEMETRY_OPTOUT"),
            Some(&"1".to_string())
        );
        assert!(request.capture_output);
    }

    #[test]
    fn test_tool_not_found_stops_before_running() {
        let ctx = DotNetContext::new(MissingLocator, RecordingRunner::exiting_with(0));
        let err = ctx.restore(None, None).unwrap_err();

        assert!(matches!(err, DotNetError::ToolNotFound { .. }));
        assert!(ctx.runner().calls().is_empty());
    }

    #[test]
    fn test_nuget_delete_non_interactive() {
        let ctx = context(0);
        let settings = NuGetDeleteSettings {
            non_interactive: true,
            ..Default::default()
        };

        ctx.nuget_delete("Foo", None, Some(&settings)).unwrap();

        assert_eq!(
            ctx.runner().only_tokens(),
            vec!["nuget", "delete", "Foo", "--non-interactive"]
        );
    }

    #[test]
    fn test_nuget_delete_prompt_disables_capture() {
        let ctx = context(0);
        let mut settings = NuGetDeleteSettings::default();
        settings.common.capture_output = true;

        ctx.nuget_delete("Foo", Some("1.0.0"), Some(&settings))
            .unwrap();
        assert!(!ctx.runner().calls()[0].capture_output);

        settings.non_interactive = true;
        ctx.nuget_delete("Foo", Some("1.0.0"), Some(&settings))
            .unwrap();
        assert!(ctx.runner().calls()[1].capture_output);
    }

    #[test]
    fn test_run_and_exec_trailing_arguments() {
        let ctx = context(0);
        let app_args: ProcessArguments = ["--port", "8080"].into_iter().collect();

        ctx.run(Some(Path::new("src/Web")), Some(&app_args), None)
            .unwrap();
        ctx.execute(Path::new("bin/Tool.dll"), Some(&app_args), None)
            .unwrap();

        let calls = ctx.runner().calls();
        assert_eq!(
            calls[0].arguments.tokens(),
            vec!["run", "--project", "src/Web", "--", "--port", "8080"]
        );
        assert_eq!(
            calls[1].arguments.tokens(),
            vec!["exec", "bin/Tool.dll", "--port", "8080"]
        );
    }

    #[test]
    fn test_outcome_redacts_api_key() {
        let ctx = context(0);
        let settings = NuGetPushSettings::default()
            .with_source("https://api.nuget.org/v3/index.json")
            .with_api_key("oy2secret");

        let outcome = ctx
            .nuget_push(Path::new("Foo.1.0.0.nupkg"), Some(&settings))
            .unwrap();

        assert!(!outcome.command_line.contains("oy2secret"));
        // The real process still gets the key.
        assert!(
            ctx.runner().calls()[0]
                .arguments
                .argv()
                .contains(&"oy2secret".to_string())
        );
    }

    // ==================== Invocation Log ====================

    #[test]
    fn test_logger_records_each_invocation() {
        let logger = Arc::new(RecordingLogger::default());
        let ctx = DotNetContext::new(
            StaticLocator::new("dotnet"),
            RecordingRunner::exiting_with(3),
        )
        .with_logger(logger.clone());

        let _ = ctx.test(Path::new("Tests.csproj"), None, None);

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "command_failed");
        assert_eq!(events[0].payload["command"], "test");
        assert_eq!(events[0].payload["exit_code"], 3);
        assert_eq!(events[0].payload["command_line"], "test Tests.csproj");
    }

    #[test]
    fn test_argument_error_is_not_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let ctx = context(0).with_logger(logger.clone());

        let _ = ctx.publish(Path::new(""), None);

        assert!(logger.events.lock().unwrap().is_empty());
    }
}
