//! Domain layer for netcall
//!
//! Pure types and logic for driving the `dotnet` CLI. No I/O lives here:
//! tool lookup and process spawning are ports in `netcall-application`.
//!
//! # Core Concepts
//!
//! ## Settings
//!
//! One settings type per command ([`BuildSettings`], [`TestSettings`], ...).
//! Each exposes an ordered option table through [`CommandSettings`]; unset
//! options contribute nothing, so the tool's own defaults apply.
//!
//! ## Requests
//!
//! A [`CommandRequest`] carries the validated positional inputs. Building
//! one is the only place [`ArgumentError`] can arise.
//!
//! ## Serialization
//!
//! [`serialize`] turns a request plus settings into [`ProcessArguments`]:
//! verb, positionals, flags in table order, then trailing arguments.

pub mod arguments;
pub mod command;
pub mod config;
pub mod core;
pub mod process;
pub mod settings;

// Re-export commonly used types
pub use arguments::{Argument, ProcessArguments, REDACTED};
pub use command::{CommandRequest, DotNetCommand, FlagPlacement, serialize};
pub use config::OutputFormat;
pub use core::{DOTNET_TOOL, error::ArgumentError};
pub use process::{CommandOutcome, NO_EXIT_CODE, ProcessResult};
pub use settings::{
    BuildSettings, CleanSettings, CommandOption, CommandSettings, CommonSettings, ExecuteSettings,
    MsBuildOptions, NuGetDeleteSettings, NuGetPushSettings, OptionValue, PackSettings,
    PublishSettings, RestoreSettings, RunSettings, TestSettings, Verbosity,
};
