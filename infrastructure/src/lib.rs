//! Infrastructure layer for netcall
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod locator;
pub mod logging;
pub mod process;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileDotNetConfig, FileLoggingConfig,
    FileOutputConfig, Severity,
};
pub use locator::DotNetToolLocator;
pub use logging::JsonlInvocationLogger;
pub use process::{DryRunProcessRunner, SystemProcessRunner};
