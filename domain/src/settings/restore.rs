//! `dotnet restore` settings

use super::common::{CommonSettings, MsBuildOptions, Verbosity};
use super::option::{CommandOption, CommandSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    /// Package sources to use; each becomes its own `--source`
    pub sources: Vec<String>,
    pub packages_directory: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub runtime: Option<String>,
    pub no_cache: bool,
    pub disable_parallel: bool,
    pub ignore_failed_sources: bool,
    pub no_dependencies: bool,
    pub force: bool,
    pub locked_mode: bool,
    pub use_lock_file: bool,
    pub lock_file_path: Option<PathBuf>,
    pub interactive: bool,
    pub verbosity: Option<Verbosity>,
    pub msbuild: MsBuildOptions,
}

impl RestoreSettings {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }
}

impl CommandSettings for RestoreSettings {
    fn common(&self) -> &CommonSettings {
        &self.common
    }

    fn options(&self) -> Vec<CommandOption<'_>> {
        let mut options = vec![
            CommandOption::repeated("sources", "--source", &self.sources),
            CommandOption::path("packages_directory", "--packages", &self.packages_directory),
            CommandOption::path("config_file", "--configfile", &self.config_file),
            CommandOption::text("runtime", "--runtime", &self.runtime),
            CommandOption::switch("no_cache", "--no-cache", self.no_cache),
            CommandOption::switch("disable_parallel", "--disable-parallel", self.disable_parallel),
            CommandOption::switch(
                "ignore_failed_sources",
                "--ignore-failed-sources",
                self.ignore_failed_sources,
            ),
            CommandOption::switch("no_dependencies", "--no-dependencies", self.no_dependencies),
            CommandOption::switch("force", "--force", self.force),
            CommandOption::switch("locked_mode", "--locked-mode", self.locked_mode),
            CommandOption::switch("use_lock_file", "--use-lock-file", self.use_lock_file),
            CommandOption::path("lock_file_path", "--lock-file-path", &self.lock_file_path),
            CommandOption::switch("interactive", "--interactive", self.interactive),
            CommandOption::verbosity(self.verbosity),
        ];
        options.extend(self.msbuild.options());
        options
    }
}
