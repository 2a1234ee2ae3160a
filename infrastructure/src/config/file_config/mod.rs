//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod dotnet;
mod logging;
mod output;

pub use dotnet::FileDotNetConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work at all.
    Error,
    /// The configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A path-valued field was set to an empty string.
    EmptyPath { field: String },
    /// An environment variable name is empty or contains `=`.
    InvalidEnvironmentName { name: String },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Invocation defaults
    pub dotnet: FileDotNetConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Invocation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Render as TOML (for --show-config)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let paths = [
            ("dotnet.tool_path", &self.dotnet.tool_path),
            ("dotnet.working_directory", &self.dotnet.working_directory),
            ("logging.invocation_log", &self.logging.invocation_log),
        ];
        for (field, path) in paths {
            if let Some(path) = path
                && path.as_os_str().is_empty()
            {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    message: format!("{}: path cannot be empty", field),
                });
            }
        }

        for name in self.dotnet.environment.keys() {
            if name.trim().is_empty() || name.contains('=') {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidEnvironmentName { name: name.clone() },
                    message: format!(
                        "dotnet.environment: '{}' is not a valid variable name",
                        name
                    ),
                });
            }
        }

        issues
    }
}
