//! `dotnet publish` settings

use super::common::{CommonSettings, MsBuildOptions, Verbosity};
use super::option::{CommandOption, CommandSettings, OptionValue};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub output_directory: Option<PathBuf>,
    pub runtime: Option<String>,
    pub framework: Option<String>,
    pub configuration: Option<String>,
    pub version_suffix: Option<String>,
    /// `Some(false)` is meaningful: it forces a framework-dependent publish
    /// even when a runtime identifier is given.
    pub self_contained: Option<bool>,
    pub sources: Vec<String>,
    pub no_restore: bool,
    pub no_build: bool,
    pub no_dependencies: bool,
    pub force: bool,
    pub no_logo: bool,
    pub verbosity: Option<Verbosity>,
    pub msbuild: MsBuildOptions,
}

impl CommandSettings for PublishSettings {
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
            CommandOption::new(
                "self_contained",
                "--self-contained",
                OptionValue::Bool(self.self_contained),
            ),
            CommandOption::repeated("sources", "--source", &self.sources),
            CommandOption::switch("no_restore", "--no-restore", self.no_restore),
            CommandOption::switch("no_build", "--no-build", self.no_build),
            CommandOption::switch("no_dependencies", "--no-dependencies", self.no_dependencies),
            CommandOption::switch("force", "--force", self.force),
            CommandOption::switch("no_logo", "--nologo", self.no_logo),
            CommandOption::verbosity(self.verbosity),
        ];
        options.extend(self.msbuild.options());
        options
    }
}
