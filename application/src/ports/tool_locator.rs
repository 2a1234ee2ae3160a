//! Tool locator port
//!
//! Maps a logical tool name to an executable path on this machine.

use crate::error::DotNetError;
use std::path::{Path, PathBuf};

/// Port for finding the external tool's executable.
///
/// Looked up once per invocation; implementations must not cache across
/// calls, since installs can change underneath a long-lived process.
pub trait ToolLocator: Send + Sync {
    /// Resolve `tool` to an executable path.
    ///
    /// When `override_path` is given it is authoritative: an override that
    /// does not point at an existing file is [`DotNetError::ToolNotFound`],
    /// never a silent fallback to another binary.
    fn resolve(&self, tool: &str, override_path: Option<&Path>) -> Result<PathBuf, DotNetError>;
}
