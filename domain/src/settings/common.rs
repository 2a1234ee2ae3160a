//! Settings shared by every command

use super::option::{CommandOption, OptionValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// MSBuild / dotnet logging verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    Minimal,
    Normal,
    Detailed,
    Diagnostic,
}

impl Verbosity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Minimal => "minimal",
            Verbosity::Normal => "normal",
            Verbosity::Detailed => "detailed",
            Verbosity::Diagnostic => "diagnostic",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Short forms follow the dotnet CLI (-v q, -v m, ...).
        match s.to_lowercase().as_str() {
            "q" | "quiet" => Ok(Verbosity::Quiet),
            "m" | "minimal" => Ok(Verbosity::Minimal),
            "n" | "normal" => Ok(Verbosity::Normal),
            "d" | "detailed" => Ok(Verbosity::Detailed),
            "diag" | "diagnostic" => Ok(Verbosity::Diagnostic),
            _ => Err(format!("Unknown verbosity: {}", s)),
        }
    }
}

/// Runner directives and global flags carried by every settings type.
///
/// None of these are command options: they decide how the process is
/// started rather than what the tool is told.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonSettings {
    /// Explicit tool executable, consulted before any search
    pub tool_path: Option<PathBuf>,
    /// Working directory for the child process
    pub working_directory: Option<PathBuf>,
    /// Extra environment variables for the child process
    pub environment_variables: BTreeMap<String, String>,
    /// Emit the global `--diagnostics` flag before the verb
    pub diagnostic_output: bool,
    /// Capture stdout/stderr instead of passing them through
    pub capture_output: bool,
}

impl CommonSettings {
    pub fn with_tool_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tool_path = Some(path.into());
        self
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn with_environment_variable(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.environment_variables.insert(key.into(), value.into());
        self
    }

    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }
}

/// MSBuild pass-through options for commands that drive MSBuild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsBuildOptions {
    /// `--property:Name=v1%3Bv2`, values MSBuild-escaped
    pub properties: BTreeMap<String, Vec<String>>,
    /// `--warnaserror:CS0001,CS0002`
    pub warn_as_error: Vec<String>,
    /// `--nowarn:CS1591;NU1603`
    pub no_warn: Vec<String>,
}

impl MsBuildOptions {
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    pub fn options(&self) -> [CommandOption<'_>; 3] {
        [
            CommandOption::new(
                "msbuild.properties",
                "--property:",
                OptionValue::Properties(&self.properties),
            ),
            CommandOption::new(
                "msbuild.warn_as_error",
                "--warnaserror:",
                OptionValue::Attached(&self.warn_as_error, ','),
            ),
            CommandOption::new(
                "msbuild.no_warn",
                "--nowarn:",
                OptionValue::Attached(&self.no_warn, ';'),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_str() {
        assert_eq!("quiet".parse::<Verbosity>().unwrap(), Verbosity::Quiet);
        assert_eq!("DIAG".parse::<Verbosity>().unwrap(), Verbosity::Diagnostic);
        assert_eq!("m".parse::<Verbosity>().unwrap(), Verbosity::Minimal);
        assert!("loud".parse::<Verbosity>().is_err());
    }

    #[test]
    fn test_verbosity_serialize_lowercase() {
        let json = serde_json::to_string(&Verbosity::Detailed).unwrap();
        assert_eq!(json, "\"detailed\"");
    }

    #[test]
    fn test_common_settings_default_is_unset() {
        let common = CommonSettings::default();
        assert!(common.tool_path.is_none());
        assert!(common.working_directory.is_none());
        assert!(common.environment_variables.is_empty());
        assert!(!common.diagnostic_output);
        assert!(!common.capture_output);
    }

    #[test]
    fn test_msbuild_property_accumulates_values() {
        let msbuild = MsBuildOptions::default()
            .with_property("DefineConstants", "TRACE")
            .with_property("DefineConstants", "CI");
        assert_eq!(
            msbuild.properties.get("DefineConstants"),
            Some(&vec!["TRACE".to_string(), "CI".to_string()])
        );
    }
}
