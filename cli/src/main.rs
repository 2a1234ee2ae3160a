//! CLI entrypoint for netcall
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use netcall_application::{
    DotNetContext, InvocationLogger, NoInvocationLogger, ProcessRunner, ToolLocator,
};
use netcall_domain::{CommonSettings, OutputFormat};
use netcall_infrastructure::{
    ConfigLoader, DotNetToolLocator, DryRunProcessRunner, FileConfig, JsonlInvocationLogger,
    Severity, SystemProcessRunner,
};
use netcall_presentation::{Cli, Command, ConsoleFormatter, dispatch};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.global.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = if cli.global.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.global.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => bail!("invalid configuration: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    if cli.global.show_config {
        show_config(&cli, &config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::from(2));
    };

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format = config
        .output
        .resolve_format(cli.global.format.map(OutputFormat::from));

    // === Dependency Injection ===
    let logger: Arc<dyn InvocationLogger> = match cli
        .global
        .log_invocations
        .clone()
        .or_else(|| config.logging.invocation_log.clone())
        .and_then(JsonlInvocationLogger::new)
    {
        Some(logger) => {
            info!("Logging invocations to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoInvocationLogger),
    };

    let common = cli.global.common_settings(config.dotnet.to_common_settings());
    let output = Output {
        format,
        quiet: cli.global.quiet,
    };

    let code = if cli.global.dry_run {
        let ctx = DotNetContext::new(DotNetToolLocator::new(), DryRunProcessRunner::new())
            .with_logger(logger);
        execute(&ctx, command, common, &output)
    } else {
        let ctx = DotNetContext::new(DotNetToolLocator::new(), SystemProcessRunner::new())
            .with_logger(logger);
        execute(&ctx, command, common, &output)
    };

    Ok(code)
}

struct Output {
    format: OutputFormat,
    quiet: bool,
}

fn execute<L: ToolLocator, R: ProcessRunner>(
    ctx: &DotNetContext<L, R>,
    command: Command,
    common: CommonSettings,
    output: &Output,
) -> ExitCode {
    match dispatch(ctx, command, common) {
        Ok(outcome) => {
            match output.format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&outcome)),
                OutputFormat::Text if !output.quiet => {
                    println!("{}", ConsoleFormatter::format(&outcome))
                }
                OutputFormat::Text => {}
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            match output.format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_error_json(&err)),
                OutputFormat::Text => eprintln!("{}", ConsoleFormatter::format_error(&err)),
            }
            // Mirror the tool's own exit code when it ran
            err.exit_code()
                .and_then(|code| u8::try_from(code).ok())
                .filter(|code| *code != 0)
                .map(ExitCode::from)
                .unwrap_or(ExitCode::FAILURE)
        }
    }
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    if cli.global.no_config {
        println!("Configuration files disabled (--no-config)");
    } else {
        ConfigLoader::print_config_sources(cli.global.config.as_deref());
    }
    println!();
    println!("{}", config.to_toml()?);
    Ok(())
}
