//! CLI command definitions

use super::args::{
    BuildArgs, CleanArgs, ExecArgs, NuGetDeleteArgs, NuGetPushArgs, PackArgs, PublishArgs,
    RestoreArgs, RunArgs, TestArgs, parse_key_value,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use netcall_domain::CommonSettings;
use std::path::PathBuf;

/// Output format for command outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON object per invocation
    Json,
}

impl From<OutputFormat> for netcall_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => netcall_domain::OutputFormat::Text,
            OutputFormat::Json => netcall_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for netcall
#[derive(Parser, Debug)]
#[command(name = "netcall")]
#[command(author, version, about = "Typed front end for the dotnet CLI")]
#[command(long_about = r#"
netcall runs dotnet commands from typed, validated settings.

Required inputs are checked before anything is launched, the dotnet
executable is located once per invocation, and the tool's exit code is
passed through as netcall's own.

Configuration files are loaded from (in priority order):
1. NETCALL_* environment variables (NETCALL_DOTNET__TOOL_PATH=...)
2. --config <path>     Explicit config file
3. ./netcall.toml      Project-level config
4. ~/.config/netcall/config.toml   Global config

Example:
  netcall build ./src/App -c Release -o ./artifacts
  netcall test tests/Unit.csproj --filter Category=Unit -- RunConfiguration.MaxCpuCount=1
  netcall --dry-run nuget push out/App.1.0.0.nupkg -s https://api.nuget.org/v3/index.json -k $KEY
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags accepted before or after any subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the outcome summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the merged configuration, then exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// dotnet executable to use instead of searching for one
    #[arg(long, value_name = "PATH", global = true)]
    pub tool_path: Option<PathBuf>,

    /// Working directory for the dotnet process
    #[arg(short = 'C', long, value_name = "DIR", global = true)]
    pub working_directory: Option<PathBuf>,

    /// Extra environment variable for the dotnet process (repeatable)
    #[arg(short, long = "env", value_name = "NAME=VALUE", value_parser = parse_key_value, global = true)]
    pub env: Vec<(String, String)>,

    /// Capture dotnet's output instead of streaming it
    #[arg(long, global = true)]
    pub capture: bool,

    /// Pass --diagnostics to dotnet
    #[arg(long, global = true)]
    pub diagnostics: bool,

    /// Print the command line instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Append a JSONL record of each invocation to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_invocations: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Restore the dependencies and tools of a project
    Restore(RestoreArgs),
    /// Build a project and its dependencies
    Build(BuildArgs),
    /// Create a NuGet package
    Pack(PackArgs),
    /// Build and run a project
    Run(RunArgs),
    /// Publish an application and its dependencies
    Publish(PublishArgs),
    /// Run unit tests
    Test(TestArgs),
    /// Clean build outputs
    Clean(CleanArgs),
    /// Execute a compiled assembly
    Exec(ExecArgs),
    /// NuGet package operations
    Nuget {
        #[command(subcommand)]
        command: NuGetCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum NuGetCommand {
    /// Push a package to a server
    Push(NuGetPushArgs),
    /// Delete or unlist a package from a server
    Delete(NuGetDeleteArgs),
}

impl GlobalArgs {
    /// Overlay command-line flags onto configured defaults.
    ///
    /// Flags win; anything left unset on the command line keeps the
    /// configured value.
    pub fn common_settings(&self, base: CommonSettings) -> CommonSettings {
        let mut common = base;
        if let Some(path) = &self.tool_path {
            common.tool_path = Some(path.clone());
        }
        if let Some(dir) = &self.working_directory {
            common.working_directory = Some(dir.clone());
        }
        for (name, value) in &self.env {
            common
                .environment_variables
                .insert(name.clone(), value.clone());
        }
        common.capture_output |= self.capture;
        common.diagnostic_output |= self.diagnostics;
        common
    }
}
