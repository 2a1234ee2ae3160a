//! Typed settings, one struct per command.
//!
//! Every settings type embeds [`CommonSettings`] (runner directives) and
//! implements [`CommandSettings`], exposing its recognized options as an
//! enumerated [`CommandOption`] table:
//!
//! | Settings | Command | Notable options |
//! |----------|---------|-----------------|
//! | [`RestoreSettings`] | `restore` | `--source`, `--packages`, `--locked-mode` |
//! | [`BuildSettings`] | `build` | `--output`, `--configuration`, `--no-restore` |
//! | [`PackSettings`] | `pack` | `--include-symbols`, `--version-suffix` |
//! | [`RunSettings`] | `run` | `--framework`, `--launch-profile` |
//! | [`PublishSettings`] | `publish` | `--self-contained true\|false` |
//! | [`TestSettings`] | `test` | `--filter`, `--logger` (repeated) |
//! | [`CleanSettings`] | `clean` | `--output`, `--framework` |
//! | [`ExecuteSettings`] | `exec` | `--runtimeconfig`, `--depsfile` |
//! | [`NuGetPushSettings`] | `nuget push` | `--source`, `--api-key` (secret) |
//! | [`NuGetDeleteSettings`] | `nuget delete` | `--non-interactive` |
//!
//! `Default` is always "nothing set": value options are `Option`s and
//! switches are `false`, so an empty settings object leaves every decision
//! to the tool.

mod build;
mod clean;
mod common;
mod execute;
mod nuget;
mod option;
mod pack;
mod publish;
mod restore;
mod run;
mod testing;

pub use build::BuildSettings;
pub use clean::CleanSettings;
pub use common::{CommonSettings, MsBuildOptions, Verbosity};
pub use execute::ExecuteSettings;
pub use nuget::{NuGetDeleteSettings, NuGetPushSettings};
pub use option::{CommandOption, CommandSettings, OptionValue};
pub use pack::PackSettings;
pub use publish::PublishSettings;
pub use restore::RestoreSettings;
pub use run::RunSettings;
pub use testing::TestSettings;
