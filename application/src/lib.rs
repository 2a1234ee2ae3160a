//! Application layer for netcall
//!
//! This crate contains the command executors and the port definitions they
//! depend on. It depends only on the domain layer.

pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use error::DotNetError;
pub use ports::{
    invocation_logger::{InvocationEvent, InvocationLogger, NoInvocationLogger},
    process_runner::{ProcessRequest, ProcessRunner},
    tool_locator::ToolLocator,
};
pub use use_cases::dotnet_context::DotNetContext;
