//! `dotnet exec` settings
//!
//! Host options only; `exec` writes them before the assembly path because
//! everything after the assembly belongs to the application.

use super::common::CommonSettings;
use super::option::{CommandOption, CommandSettings, OptionValue};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecuteSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub runtime_config: Option<PathBuf>,
    pub deps_file: Option<PathBuf>,
    pub additional_probing_paths: Vec<PathBuf>,
    pub fx_version: Option<String>,
    pub roll_forward: Option<String>,
}

impl CommandSettings for ExecuteSettings {
    fn common(&self) -> &CommonSettings {
        &self.common
    }

    fn options(&self) -> Vec<CommandOption<'_>> {
        vec![
            CommandOption::path("runtime_config", "--runtimeconfig", &self.runtime_config),
            CommandOption::path("deps_file", "--depsfile", &self.deps_file),
            CommandOption::new(
                "additional_probing_paths",
                "--additionalprobingpath",
                OptionValue::RepeatedPaths(&self.additional_probing_paths),
            ),
            CommandOption::text("fx_version", "--fx-version", &self.fx_version),
            CommandOption::text("roll_forward", "--roll-forward", &self.roll_forward),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::ProcessArguments;
    use crate::command::{CommandRequest, serialize};
    use std::path::Path;

    #[test]
    fn test_every_option_before_assembly() {
        let settings = ExecuteSettings {
            runtime_config: Some(PathBuf::from("app.runtimeconfig.json")),
            deps_file: Some(PathBuf::from("app.deps.json")),
            additional_probing_paths: vec![
                PathBuf::from("/opt/probe1"),
                PathBuf::from("/opt/probe2"),
            ],
            fx_version: Some("8.0.1".to_string()),
            roll_forward: Some("LatestMinor".to_string()),
            ..Default::default()
        };
        let app_args: ProcessArguments = ["serve"].into_iter().collect();
        let request = CommandRequest::execute(Path::new("bin/app.dll"), Some(&app_args)).unwrap();

        assert_eq!(
            serialize(&request, &settings).tokens(),
            vec![
                "exec",
                "--runtimeconfig",
                "app.runtimeconfig.json",
                "--depsfile",
                "app.deps.json",
                "--additionalprobingpath",
                "/opt/probe1",
                "--additionalprobingpath",
                "/opt/probe2",
                "--fx-version",
                "8.0.1",
                "--roll-forward",
                "LatestMinor",
                "bin/app.dll",
                "serve",
            ]
        );
    }
}
