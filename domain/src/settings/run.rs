//! `dotnet run` settings

use super::common::{CommonSettings, Verbosity};
use super::option::{CommandOption, CommandSettings};
use serde::{Deserialize, Serialize};

/// The project is not part of these settings: it is an input of the
/// `run` alias and is written as `--project <path>` right after the verb.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub framework: Option<String>,
    pub configuration: Option<String>,
    pub runtime: Option<String>,
    pub launch_profile: Option<String>,
    pub sources: Vec<String>,
    pub no_restore: bool,
    pub no_build: bool,
    pub no_launch_profile: bool,
    pub verbosity: Option<Verbosity>,
}

impl CommandSettings for RunSettings {
    fn common(&self) -> &CommonSettings {
        &self.common
    }

    fn options(&self) -> Vec<CommandOption<'_>> {
        vec![
            CommandOption::text("framework", "--framework", &self.framework),
            CommandOption::text("configuration", "--configuration", &self.configuration),
            CommandOption::text("runtime", "--runtime", &self.runtime),
            CommandOption::text("launch_profile", "--launch-profile", &self.launch_profile),
            CommandOption::repeated("sources", "--source", &self.sources),
            CommandOption::switch("no_restore", "--no-restore", self.no_restore),
            CommandOption::switch("no_build", "--no-build", self.no_build),
            CommandOption::switch(
                "no_launch_profile",
                "--no-launch-profile",
                self.no_launch_profile,
            ),
            CommandOption::verbosity(self.verbosity),
        ]
    }
}
