//! `dotnet build` settings

use super::common::{CommonSettings, MsBuildOptions, Verbosity};
use super::option::{CommandOption, CommandSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub output_directory: Option<PathBuf>,
    pub runtime: Option<String>,
    pub framework: Option<String>,
    pub configuration: Option<String>,
    pub version_suffix: Option<String>,
    pub sources: Vec<String>,
    pub no_restore: bool,
    pub no_dependencies: bool,
    pub no_incremental: bool,
    pub no_logo: bool,
    pub verbosity: Option<Verbosity>,
    pub msbuild: MsBuildOptions,
}

impl BuildSettings {
    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    pub fn with_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_directory = Some(dir.into());
        self
    }
}

impl CommandSettings for BuildSettings {
    fn common(&self) -> &CommonSettings {
        &self.common
    }

    fn options(&self) -> Vec<CommandOption<'_>> {
        let mut options = vec![
            CommandOption::path("output_directory", "--output", &self.output_directory),
            CommandOption::text("runtime", "--runtime", &self.runtime),
            CommandOption::text("framework", "--framework", &self.framework),
            CommandOption::text("configuration", "--configuration", &self.configuration),
            CommandOption::text("version_suffix", "--version-suffix", &self.version_suffix),
            CommandOption::repeated("sources", "--source", &self.sources),
            CommandOption::switch("no_restore", "--no-restore", self.no_restore),
            CommandOption::switch("no_dependencies", "--no-dependencies", self.no_dependencies),
            CommandOption::switch("no_incremental", "--no-incremental", self.no_incremental),
            CommandOption::switch("no_logo", "--nologo", self.no_logo),
            CommandOption::verbosity(self.verbosity),
        ];
        options.extend(self.msbuild.options());
        options
    }
}
