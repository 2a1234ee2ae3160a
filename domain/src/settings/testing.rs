//! `dotnet test` settings

use super::common::{CommonSettings, MsBuildOptions, Verbosity};
use super::option::{CommandOption, CommandSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    /// `.runsettings` file
    pub settings_file: Option<PathBuf>,
    pub filter: Option<String>,
    pub test_adapter_path: Option<PathBuf>,
    /// Each logger becomes its own `--logger`
    pub loggers: Vec<String>,
    /// Each data collector becomes its own `--collect`
    pub collectors: Vec<String>,
    pub output_directory: Option<PathBuf>,
    pub framework: Option<String>,
    pub configuration: Option<String>,
    pub runtime: Option<String>,
    pub results_directory: Option<PathBuf>,
    pub diagnostic_file: Option<PathBuf>,
    pub blame: bool,
    pub no_build: bool,
    pub no_restore: bool,
    pub no_logo: bool,
    pub verbosity: Option<Verbosity>,
    pub msbuild: MsBuildOptions,
}

impl TestSettings {
    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.loggers.push(logger.into());
        self
    }
}

impl CommandSettings for TestSettings {
    fn common(&self) -> &CommonSettings {
        &self.common
    }

    fn options(&self) -> Vec<CommandOption<'_>> {
        let mut options = vec![
            CommandOption::path("settings_file", "--settings", &self.settings_file),
            CommandOption::text("filter", "--filter", &self.filter),
            CommandOption::path(
                "test_adapter_path",
                "--test-adapter-path",
                &self.test_adapter_path,
            ),
            CommandOption::repeated("loggers", "--logger", &self.loggers),
            CommandOption::repeated("collectors", "--collect", &self.collectors),
            CommandOption::path("output_directory", "--output", &self.output_directory),
            CommandOption::text("framework", "--framework", &self.framework),
            CommandOption::text("configuration", "--configuration", &self.configuration),
            CommandOption::text("runtime", "--runtime", &self.runtime),
            CommandOption::path(
                "results_directory",
                "--results-directory",
                &self.results_directory,
            ),
            CommandOption::path("diagnostic_file", "--diag", &self.diagnostic_file),
            CommandOption::switch("blame", "--blame", self.blame),
            CommandOption::switch("no_build", "--no-build", self.no_build),
            CommandOption::switch("no_restore", "--no-restore", self.no_restore),
            CommandOption::switch("no_logo", "--nologo", self.no_logo),
            CommandOption::verbosity(self.verbosity),
        ];
        options.extend(self.msbuild.options());
        options
    }
}
