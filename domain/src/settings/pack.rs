//! `dotnet pack` settings

use super::common::{CommonSettings, MsBuildOptions, Verbosity};
use super::option::{CommandOption, CommandSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub output_directory: Option<PathBuf>,
    pub configuration: Option<String>,
    pub version_suffix: Option<String>,
    pub runtime: Option<String>,
    pub sources: Vec<String>,
    pub no_build: bool,
    pub no_restore: bool,
    pub no_dependencies: bool,
    pub include_symbols: bool,
    pub include_source: bool,
    pub serviceable: bool,
    pub no_logo: bool,
    pub verbosity: Option<Verbosity>,
    pub msbuild: MsBuildOptions,
}

impl CommandSettings for PackSettings {
    fn common(&self) -> &CommonSettings {
        &self.common
    }

    fn options(&self) -> Vec<CommandOption<'_>> {
        let mut options = vec![
            CommandOption::path("output_directory", "--output", &self.output_directory),
            CommandOption::text("configuration", "--configuration", &self.configuration),
            CommandOption::text("version_suffix", "--version-suffix", &self.version_suffix),
            CommandOption::text("runtime", "--runtime", &self.runtime),
            CommandOption::repeated("sources", "--source", &self.sources),
            CommandOption::switch("no_build", "--no-build", self.no_build),
            CommandOption::switch("no_restore", "--no-restore", self.no_restore),
            CommandOption::switch("no_dependencies", "--no-dependencies", self.no_dependencies),
            CommandOption::switch("include_symbols", "--include-symbols", self.include_symbols),
            CommandOption::switch("include_source", "--include-source", self.include_source),
            CommandOption::switch("serviceable", "--serviceable", self.serviceable),
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
        let settings = PackSettings {
            output_directory: Some(PathBuf::from("./nupkgs")),
            configuration: Some("Release".to_string()),
            version_suffix: Some("beta.1".to_string()),
            runtime: Some("win-x64".to_string()),
            sources: vec!["./feed".to_string()],
            no_build: true,
            no_restore: true,
            no_dependencies: true,
            include_symbols: true,
            include_source: true,
            serviceable: true,
            no_logo: true,
            verbosity: Some(Verbosity::Quiet),
            msbuild: MsBuildOptions::default().with_property("PackageVersion", "2.0.0"),
            ..Default::default()
        };
        let request = CommandRequest::pack(Path::new("src/App/App.csproj")).unwrap();

        assert_eq!(
            serialize(&request, &settings).tokens(),
            vec![
                "pack",
                "src/App/App.csproj",
                "--output",
                "./nupkgs",
                "--configuration",
                "Release",
                "--version-suffix",
                "beta.1",
                "--runtime",
                "win-x64",
                "--source",
                "./feed",
                "--no-build",
                "--no-restore",
                "--no-dependencies",
                "--include-symbols",
                "--include-source",
                "--serviceable",
                "--nologo",
                "--verbosity",
                "quiet",
                "--property:PackageVersion=2.0.0",
            ]
        );
    }
}
