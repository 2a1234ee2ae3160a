//! Per-command CLI arguments
//!
//! Each `*Args` struct mirrors one settings type and converts into it once
//! the shared [`CommonSettings`] have been resolved.

use clap::Args;
use netcall_domain::{
    BuildSettings, CleanSettings, CommonSettings, ExecuteSettings, MsBuildOptions,
    NuGetDeleteSettings, NuGetPushSettings, PackSettings, PublishSettings, RestoreSettings,
    RunSettings, TestSettings, Verbosity,
};
use std::path::PathBuf;

/// Parse `NAME=VALUE`.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

fn parse_verbosity(s: &str) -> Result<Verbosity, String> {
    s.parse()
}

/// MSBuild pass-through options shared by build-like commands
#[derive(Args, Debug, Clone, Default)]
pub struct MsBuildArgs {
    /// Set an MSBuild property (repeatable; repeated names accumulate)
    #[arg(short = 'p', long = "property", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub properties: Vec<(String, String)>,

    /// Treat these warning codes as errors
    #[arg(long = "warnaserror", value_name = "CODE", value_delimiter = ',')]
    pub warn_as_error: Vec<String>,

    /// Suppress these warning codes
    #[arg(long = "nowarn", value_name = "CODE", value_delimiter = ',')]
    pub no_warn: Vec<String>,
}

impl MsBuildArgs {
    pub fn into_options(self) -> MsBuildOptions {
        let options = MsBuildOptions {
            warn_as_error: self.warn_as_error,
            no_warn: self.no_warn,
            ..Default::default()
        };
        self.properties
            .into_iter()
            .fold(options, |options, (name, value)| {
                options.with_property(name, value)
            })
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct RestoreArgs {
    /// Project or solution to restore (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Package source (repeatable)
    #[arg(short, long = "source", value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Directory to restore packages into
    #[arg(long = "packages", value_name = "DIR")]
    pub packages_directory: Option<PathBuf>,

    /// NuGet configuration file
    #[arg(long = "configfile", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    #[arg(short, long)]
    pub runtime: Option<String>,

    #[arg(long)]
    pub no_cache: bool,

    #[arg(long)]
    pub disable_parallel: bool,

    #[arg(long)]
    pub ignore_failed_sources: bool,

    #[arg(long)]
    pub no_dependencies: bool,

    #[arg(long)]
    pub force: bool,

    #[arg(long)]
    pub locked_mode: bool,

    #[arg(long)]
    pub use_lock_file: bool,

    #[arg(long, value_name = "FILE")]
    pub lock_file_path: Option<PathBuf>,

    #[arg(long)]
    pub interactive: bool,

    /// MSBuild verbosity (q, m, n, d, diag)
    #[arg(long, value_name = "LEVEL", value_parser = parse_verbosity)]
    pub verbosity: Option<Verbosity>,

    #[command(flatten)]
    pub msbuild: MsBuildArgs,
}

impl RestoreArgs {
    pub fn into_settings(self, common: CommonSettings) -> RestoreSettings {
        RestoreSettings {
            common,
            sources: self.sources,
            packages_directory: self.packages_directory,
            config_file: self.config_file,
            runtime: self.runtime,
            no_cache: self.no_cache,
            disable_parallel: self.disable_parallel,
            ignore_failed_sources: self.ignore_failed_sources,
            no_dependencies: self.no_dependencies,
            force: self.force,
            locked_mode: self.locked_mode,
            use_lock_file: self.use_lock_file,
            lock_file_path: self.lock_file_path,
            interactive: self.interactive,
            verbosity: self.verbosity,
            msbuild: self.msbuild.into_options(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Project or solution file
    pub project: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub runtime: Option<String>,

    #[arg(short, long)]
    pub framework: Option<String>,

    #[arg(short, long)]
    pub configuration: Option<String>,

    #[arg(long)]
    pub version_suffix: Option<String>,

    /// Package source (repeatable)
    #[arg(short, long = "source", value_name = "SOURCE")]
    pub sources: Vec<String>,

    #[arg(long)]
    pub no_restore: bool,

    #[arg(long)]
    pub no_dependencies: bool,

    #[arg(long)]
    pub no_incremental: bool,

    #[arg(long = "nologo")]
    pub no_logo: bool,

    /// MSBuild verbosity (q, m, n, d, diag)
    #[arg(long, value_name = "LEVEL", value_parser = parse_verbosity)]
    pub verbosity: Option<Verbosity>,

    #[command(flatten)]
    pub msbuild: MsBuildArgs,
}

impl BuildArgs {
    pub fn into_settings(self, common: CommonSettings) -> BuildSettings {
        BuildSettings {
            common,
            output_directory: self.output,
            runtime: self.runtime,
            framework: self.framework,
            configuration: self.configuration,
            version_suffix: self.version_suffix,
            sources: self.sources,
            no_restore: self.no_restore,
            no_dependencies: self.no_dependencies,
            no_incremental: self.no_incremental,
            no_logo: self.no_logo,
            verbosity: self.verbosity,
            msbuild: self.msbuild.into_options(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PackArgs {
    /// Project file to pack
    pub project: Option<PathBuf>,

    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub configuration: Option<String>,

    #[arg(long)]
    pub version_suffix: Option<String>,

    #[arg(short, long)]
    pub runtime: Option<String>,

    #[arg(short, long = "source", value_name = "SOURCE")]
    pub sources: Vec<String>,

    #[arg(long)]
    pub no_build: bool,

    #[arg(long)]
    pub no_restore: bool,

    #[arg(long)]
    pub no_dependencies: bool,

    #[arg(long)]
    pub include_symbols: bool,

    #[arg(long)]
    pub include_source: bool,

    #[arg(long)]
    pub serviceable: bool,

    #[arg(long = "nologo")]
    pub no_logo: bool,

    #[arg(long, value_name = "LEVEL", value_parser = parse_verbosity)]
    pub verbosity: Option<Verbosity>,

    #[command(flatten)]
    pub msbuild: MsBuildArgs,
}

impl PackArgs {
    pub fn into_settings(self, common: CommonSettings) -> PackSettings {
        PackSettings {
            common,
            output_directory: self.output,
            configuration: self.configuration,
            version_suffix: self.version_suffix,
            runtime: self.runtime,
            sources: self.sources,
            no_build: self.no_build,
            no_restore: self.no_restore,
            no_dependencies: self.no_dependencies,
            include_symbols: self.include_symbols,
            include_source: self.include_source,
            serviceable: self.serviceable,
            no_logo: self.no_logo,
            verbosity: self.verbosity,
            msbuild: self.msbuild.into_options(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Project to run (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub project: Option<PathBuf>,

    #[arg(short, long)]
    pub framework: Option<String>,

    #[arg(short, long)]
    pub configuration: Option<String>,

    #[arg(short, long)]
    pub runtime: Option<String>,

    #[arg(long, value_name = "NAME")]
    pub launch_profile: Option<String>,

    #[arg(short, long = "source", value_name = "SOURCE")]
    pub sources: Vec<String>,

    #[arg(long)]
    pub no_restore: bool,

    #[arg(long)]
    pub no_build: bool,

    #[arg(long)]
    pub no_launch_profile: bool,

    #[arg(long, value_name = "LEVEL", value_parser = parse_verbosity)]
    pub verbosity: Option<Verbosity>,

    /// Arguments for the application (after `--`)
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl RunArgs {
    pub fn into_settings(self, common: CommonSettings) -> RunSettings {
        RunSettings {
            common,
            framework: self.framework,
            configuration: self.configuration,
            runtime: self.runtime,
            launch_profile: self.launch_profile,
            sources: self.sources,
            no_restore: self.no_restore,
            no_build: self.no_build,
            no_launch_profile: self.no_launch_profile,
            verbosity: self.verbosity,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PublishArgs {
    /// Project or solution to publish
    pub path: Option<PathBuf>,

    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub runtime: Option<String>,

    #[arg(short, long)]
    pub framework: Option<String>,

    #[arg(short, long)]
    pub configuration: Option<String>,

    #[arg(long)]
    pub version_suffix: Option<String>,

    /// Publish with (true) or without (false) the runtime
    #[arg(long, value_name = "BOOL")]
    pub self_contained: Option<bool>,

    #[arg(short, long = "source", value_name = "SOURCE")]
    pub sources: Vec<String>,

    #[arg(long)]
    pub no_restore: bool,

    #[arg(long)]
    pub no_build: bool,

    #[arg(long)]
    pub no_dependencies: bool,

    #[arg(long)]
    pub force: bool,

    #[arg(long = "nologo")]
    pub no_logo: bool,

    #[arg(long, value_name = "LEVEL", value_parser = parse_verbosity)]
    pub verbosity: Option<Verbosity>,

    #[command(flatten)]
    pub msbuild: MsBuildArgs,
}

impl PublishArgs {
    pub fn into_settings(self, common: CommonSettings) -> PublishSettings {
        PublishSettings {
            common,
            output_directory: self.output,
            runtime: self.runtime,
            framework: self.framework,
            configuration: self.configuration,
            version_suffix: self.version_suffix,
            self_contained: self.self_contained,
            sources: self.sources,
            no_restore: self.no_restore,
            no_build: self.no_build,
            no_dependencies: self.no_dependencies,
            force: self.force,
            no_logo: self.no_logo,
            verbosity: self.verbosity,
            msbuild: self.msbuild.into_options(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct TestArgs {
    /// Test project or solution
    pub project: Option<PathBuf>,

    /// `.runsettings` file
    #[arg(short, long = "settings", value_name = "FILE")]
    pub settings_file: Option<PathBuf>,

    #[arg(long, value_name = "EXPRESSION")]
    pub filter: Option<String>,

    #[arg(long, value_name = "DIR")]
    pub test_adapter_path: Option<PathBuf>,

    /// Test logger (repeatable)
    #[arg(short, long = "logger", value_name = "LOGGER")]
    pub loggers: Vec<String>,

    /// Data collector (repeatable)
    #[arg(long = "collect", value_name = "NAME")]
    pub collectors: Vec<String>,

    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub framework: Option<String>,

    #[arg(short, long)]
    pub configuration: Option<String>,

    #[arg(short, long)]
    pub runtime: Option<String>,

    #[arg(long, value_name = "DIR")]
    pub results_directory: Option<PathBuf>,

    /// Diagnostic log file for the test platform
    #[arg(long = "diag", value_name = "FILE")]
    pub diagnostic_file: Option<PathBuf>,

    #[arg(long)]
    pub blame: bool,

    #[arg(long)]
    pub no_build: bool,

    #[arg(long)]
    pub no_restore: bool,

    #[arg(long = "nologo")]
    pub no_logo: bool,

    #[arg(long, value_name = "LEVEL", value_parser = parse_verbosity)]
    pub verbosity: Option<Verbosity>,

    #[command(flatten)]
    pub msbuild: MsBuildArgs,

    /// Run settings arguments (after `--`)
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl TestArgs {
    pub fn into_settings(self, common: CommonSettings) -> TestSettings {
        TestSettings {
            common,
            settings_file: self.settings_file,
            filter: self.filter,
            test_adapter_path: self.test_adapter_path,
            loggers: self.loggers,
            collectors: self.collectors,
            output_directory: self.output,
            framework: self.framework,
            configuration: self.configuration,
            runtime: self.runtime,
            results_directory: self.results_directory,
            diagnostic_file: self.diagnostic_file,
            blame: self.blame,
            no_build: self.no_build,
            no_restore: self.no_restore,
            no_logo: self.no_logo,
            verbosity: self.verbosity,
            msbuild: self.msbuild.into_options(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct CleanArgs {
    /// Project or solution to clean
    pub project: Option<PathBuf>,

    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub framework: Option<String>,

    #[arg(short, long)]
    pub runtime: Option<String>,

    #[arg(short, long)]
    pub configuration: Option<String>,

    #[arg(long = "nologo")]
    pub no_logo: bool,

    #[arg(long, value_name = "LEVEL", value_parser = parse_verbosity)]
    pub verbosity: Option<Verbosity>,

    #[command(flatten)]
    pub msbuild: MsBuildArgs,
}

impl CleanArgs {
    pub fn into_settings(self, common: CommonSettings) -> CleanSettings {
        CleanSettings {
            common,
            output_directory: self.output,
            framework: self.framework,
            runtime: self.runtime,
            configuration: self.configuration,
            no_logo: self.no_logo,
            verbosity: self.verbosity,
            msbuild: self.msbuild.into_options(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExecArgs {
    #[arg(long = "runtimeconfig", value_name = "FILE")]
    pub runtime_config: Option<PathBuf>,

    #[arg(long = "depsfile", value_name = "FILE")]
    pub deps_file: Option<PathBuf>,

    /// Additional probing path (repeatable)
    #[arg(long = "additionalprobingpath", value_name = "DIR")]
    pub additional_probing_paths: Vec<PathBuf>,

    #[arg(long, value_name = "VERSION")]
    pub fx_version: Option<String>,

    #[arg(long, value_name = "POLICY")]
    pub roll_forward: Option<String>,

    /// Assembly to execute
    pub assembly: Option<PathBuf>,

    /// Arguments for the application
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl ExecArgs {
    pub fn into_settings(self, common: CommonSettings) -> ExecuteSettings {
        ExecuteSettings {
            common,
            runtime_config: self.runtime_config,
            deps_file: self.deps_file,
            additional_probing_paths: self.additional_probing_paths,
            fx_version: self.fx_version,
            roll_forward: self.roll_forward,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct NuGetPushArgs {
    /// Package file to push
    pub package: Option<PathBuf>,

    #[arg(short, long, value_name = "SOURCE")]
    pub source: Option<String>,

    #[arg(short = 'k', long, value_name = "KEY")]
    pub api_key: Option<String>,

    #[arg(long, value_name = "SOURCE")]
    pub symbol_source: Option<String>,

    #[arg(long, value_name = "KEY")]
    pub symbol_api_key: Option<String>,

    /// Push timeout in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    #[arg(long)]
    pub disable_buffering: bool,

    #[arg(long = "no-symbols")]
    pub ignore_symbols: bool,

    #[arg(long)]
    pub skip_duplicate: bool,

    #[arg(long)]
    pub force_english_output: bool,

    #[arg(long)]
    pub no_service_endpoint: bool,

    #[arg(long)]
    pub interactive: bool,
}

impl NuGetPushArgs {
    pub fn into_settings(self, common: CommonSettings) -> NuGetPushSettings {
        NuGetPushSettings {
            common,
            source: self.source,
            api_key: self.api_key,
            symbol_source: self.symbol_source,
            symbol_api_key: self.symbol_api_key,
            timeout: self.timeout,
            disable_buffering: self.disable_buffering,
            ignore_symbols: self.ignore_symbols,
            skip_duplicate: self.skip_duplicate,
            force_english_output: self.force_english_output,
            no_service_endpoint: self.no_service_endpoint,
            interactive: self.interactive,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct NuGetDeleteArgs {
    /// Package id
    pub name: Option<String>,

    /// Package version
    pub version: Option<String>,

    #[arg(short, long, value_name = "SOURCE")]
    pub source: Option<String>,

    #[arg(short = 'k', long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Do not ask for confirmation
    #[arg(long)]
    pub non_interactive: bool,

    #[arg(long)]
    pub force_english_output: bool,

    #[arg(long)]
    pub no_service_endpoint: bool,

    #[arg(long)]
    pub interactive: bool,
}

impl NuGetDeleteArgs {
    pub fn into_settings(self, common: CommonSettings) -> NuGetDeleteSettings {
        NuGetDeleteSettings {
            common,
            source: self.source,
            api_key: self.api_key,
            non_interactive: self.non_interactive,
            force_english_output: self.force_english_output,
            no_service_endpoint: self.no_service_endpoint,
            interactive: self.interactive,
        }
    }
}
