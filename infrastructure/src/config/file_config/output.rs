//! `[output]`: how netcall reports each invocation

use netcall_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Report settings for the `netcall` binary.
///
/// ```toml
/// [output]
/// format = "json"   # text | json, --format wins
/// color = false     # plain status lines
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl FileOutputConfig {
    /// Report format for this run: the `--format` flag, then the config, then text.
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
