//! Configuration file loading for netcall
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NETCALL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./netcall.toml` or `./.netcall.toml`
//! 4. Global: `$XDG_CONFIG_HOME/netcall/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileConfig, FileDotNetConfig, FileLoggingConfig,
    FileOutputConfig, Severity,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
