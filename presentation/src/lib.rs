//! Presentation layer for netcall
//!
//! This crate contains the CLI definitions, subcommand dispatch and
//! console output formatting.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, GlobalArgs, NuGetCommand, OutputFormat};
pub use cli::dispatch::dispatch;
pub use output::console::ConsoleFormatter;
