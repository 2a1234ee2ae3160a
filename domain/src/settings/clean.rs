//! `dotnet clean` settings

use super::common::{CommonSettings, MsBuildOptions, Verbosity};
use super::option::{CommandOption, CommandSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub output_directory: Option<PathBuf>,
    pub framework: Option<String>,
    pub runtime: Option<String>,
    pub configuration: Option<String>,
    pub no_logo: bool,
    pub verbosity: Option<Verbosity>,
    pub msbuild: MsBuildOptions,
}

impl CommandSettings for CleanSettings {
    fn common(&self) -> &CommonSettings {
        &self.common
    }

    fn options(&self) -> Vec<CommandOption<'_>> {
        let mut options = vec![
            CommandOption::path("output_directory", "--output", &self.output_directory),
            CommandOption::text("framework", "--framework", &self.framework),
            CommandOption::text("runtime", "--runtime", &self.runtime),
            CommandOption::text("configuration", "--configuration", &self.configuration),
            CommandOption::switch("no_logo", "--nologo", self.no_logo),
            CommandOption::verbosity(self.verbosity),
        ];
        options.extend(self.msbuild.options());
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandRequest, serialize};
    use std::path::Path;

    #[test]
    fn test_every_option_in_table_order() {
        let settings = CleanSettings {
            output_directory: Some(PathBuf::from("./out")),
            framework: Some("net8.0".to_string()),
            runtime: Some("osx-arm64".to_string()),
            configuration: Some("Release".to_string()),
            no_logo: true,
            verbosity: Some(Verbosity::Diagnostic),
            msbuild: MsBuildOptions::default().with_property("Platform", "x64"),
            ..Default::default()
        };
        let request = CommandRequest::clean(Path::new("App.sln")).unwrap();

        assert_eq!(
            serialize(&request, &settings).tokens(),
            vec![
                "clean",
                "App.sln",
                "--output",
                "./out",
                "--framework",
                "net8.0",
                "--runtime",
                "osx-arm64",
                "--configuration",
                "Release",
                "--nologo",
                "--verbosity",
                "diagnostic",
                "--property:Platform=x64",
            ]
        );
    }
}
