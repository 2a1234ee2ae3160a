//! dotnet invocation defaults from TOML (`[dotnet]` section)

use netcall_domain::CommonSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Raw `[dotnet]` configuration from TOML
///
/// ```toml
/// [dotnet]
/// tool_path = "/opt/dotnet/dotnet"
/// working_directory = "src"
/// capture_output = false
///
/// [dotnet.environment]
/// DOTNET_CLI_TELEMETRY_OPTOUT = "1"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDotNetConfig {
    /// Explicit tool executable; skips discovery when set
    pub tool_path: Option<PathBuf>,
    pub working_directory: Option<PathBuf>,
    pub capture_output: bool,
    pub diagnostic_output: bool,
    /// Extra environment variables for every invocation
    pub environment: BTreeMap<String, String>,
}

impl FileDotNetConfig {
    /// Runner directives these defaults describe.
    pub fn to_common_settings(&self) -> CommonSettings {
        CommonSettings {
            tool_path: self.tool_path.clone(),
            working_directory: self.working_directory.clone(),
            environment_variables: self.environment.clone(),
            diagnostic_output: self.diagnostic_output,
            capture_output: self.capture_output,
        }
    }
}
