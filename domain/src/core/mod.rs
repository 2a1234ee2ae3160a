//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ArgumentError`]: a required command input was absent
//! - [`DOTNET_TOOL`]: logical name of the external tool

pub mod error;

/// Logical name of the tool every command invokes.
pub const DOTNET_TOOL: &str = "dotnet";
