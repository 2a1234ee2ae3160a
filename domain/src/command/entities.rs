//! Command descriptors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where option flags go relative to the positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagPlacement {
    /// `<verb> <positional> <flags>` (most commands)
    AfterPositionals,
    /// `<verb> <flags> <positional>` (`exec`, whose trailing args belong to the app)
    BeforePositionals,
}

/// The ten dotnet CLI subcommands this crate knows how to drive.
///
/// Each variant is a descriptor: it fixes the verb tokens, the flag
/// placement and the separator written before trailing free-form arguments.
/// Everything else about a command lives in its settings type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotNetCommand {
    Restore,
    Build,
    Pack,
    Run,
    Publish,
    Test,
    Clean,
    #[serde(rename = "exec")]
    Execute,
    #[serde(rename = "nuget-push")]
    NuGetPush,
    #[serde(rename = "nuget-delete")]
    NuGetDelete,
}

impl DotNetCommand {
    pub const ALL: [DotNetCommand; 10] = [
        DotNetCommand::Restore,
        DotNetCommand::Build,
        DotNetCommand::Pack,
        DotNetCommand::Run,
        DotNetCommand::Publish,
        DotNetCommand::Test,
        DotNetCommand::Clean,
        DotNetCommand::Execute,
        DotNetCommand::NuGetPush,
        DotNetCommand::NuGetDelete,
    ];

    /// Verb tokens written right after the executable.
    pub fn verb(&self) -> &'static [&'static str] {
        match self {
            DotNetCommand::Restore => &["restore"],
            DotNetCommand::Build => &["build"],
            DotNetCommand::Pack => &["pack"],
            DotNetCommand::Run => &["run"],
            DotNetCommand::Publish => &["publish"],
            DotNetCommand::Test => &["test"],
            DotNetCommand::Clean => &["clean"],
            DotNetCommand::Execute => &["exec"],
            DotNetCommand::NuGetPush => &["nuget", "push"],
            DotNetCommand::NuGetDelete => &["nuget", "delete"],
        }
    }

    pub fn flag_placement(&self) -> FlagPlacement {
        match self {
            DotNetCommand::Execute => FlagPlacement::BeforePositionals,
            _ => FlagPlacement::AfterPositionals,
        }
    }

    /// Token separating tool flags from arguments forwarded to the app or test host.
    pub fn trailing_separator(&self) -> Option<&'static str> {
        match self {
            DotNetCommand::Run | DotNetCommand::Test => Some("--"),
            _ => None,
        }
    }

    /// Whether the tool may prompt the user, so output must not be captured
    /// unless prompting has been switched off.
    pub fn may_prompt(&self) -> bool {
        matches!(self, DotNetCommand::NuGetDelete)
    }
}

impl fmt::Display for DotNetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.verb().join(" "))
    }
}
