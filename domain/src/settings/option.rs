//! Enumerated option tables
//!
//! Every settings type lists its recognized options as [`CommandOption`]s:
//! a field name, the exact flag spelling, and the value effect. The
//! serializer walks the table in order, so table order is emission order.

use super::common::{CommonSettings, Verbosity};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// Value carried by one option, together with how it is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue<'a> {
    /// `--flag` when `true`; nothing when `false`.
    Switch(bool),
    /// `--flag value`
    Text(Option<&'a str>),
    /// `--flag path`
    Path(Option<&'a Path>),
    /// `--flag <secret>`; redacted in logs.
    Secret(Option<&'a str>),
    /// `--flag true|false`, for options whose negative form matters.
    Bool(Option<bool>),
    /// `--flag 42`
    Number(Option<u64>),
    /// `--flag quiet|minimal|normal|detailed|diagnostic`
    Verbosity(Option<Verbosity>),
    /// `--flag v1 --flag v2`
    Repeated(&'a [String]),
    /// `--flag p1 --flag p2`
    RepeatedPaths(&'a [PathBuf]),
    /// `--flag v1<delim>v2`
    Joined(&'a [String], char),
    /// `--flag:v1<delim>v2` as a single token
    Attached(&'a [String], char),
    /// `--flag:Key=v1%3Bv2`, one token per key, values MSBuild-escaped
    Properties(&'a BTreeMap<String, Vec<String>>),
}

impl OptionValue<'_> {
    /// Whether this option contributes anything to the command line.
    pub fn is_set(&self) -> bool {
        match self {
            OptionValue::Switch(on) => *on,
            OptionValue::Text(v) | OptionValue::Secret(v) => v.is_some(),
            OptionValue::Path(v) => v.is_some(),
            OptionValue::Bool(v) => v.is_some(),
            OptionValue::Number(v) => v.is_some(),
            OptionValue::Verbosity(v) => v.is_some(),
            OptionValue::Repeated(v) | OptionValue::Joined(v, _) | OptionValue::Attached(v, _) => {
                !v.is_empty()
            }
            OptionValue::RepeatedPaths(v) => !v.is_empty(),
            OptionValue::Properties(v) => !v.is_empty(),
        }
    }
}

/// One row of a settings type's option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOption<'a> {
    /// Settings field name (e.g. `"output_directory"`)
    pub name: &'static str,
    /// Flag spelling the tool expects (e.g. `"--output"`); case-sensitive
    pub flag: &'static str,
    pub value: OptionValue<'a>,
}

impl<'a> CommandOption<'a> {
    pub const fn new(name: &'static str, flag: &'static str, value: OptionValue<'a>) -> Self {
        Self { name, flag, value }
    }

    pub fn switch(name: &'static str, flag: &'static str, on: bool) -> Self {
        Self::new(name, flag, OptionValue::Switch(on))
    }

    pub fn text(name: &'static str, flag: &'static str, value: &'a Option<String>) -> Self {
        Self::new(name, flag, OptionValue::Text(value.as_deref()))
    }

    pub fn path(name: &'static str, flag: &'static str, value: &'a Option<PathBuf>) -> Self {
        Self::new(name, flag, OptionValue::Path(value.as_deref()))
    }

    pub fn secret(name: &'static str, flag: &'static str, value: &'a Option<String>) -> Self {
        Self::new(name, flag, OptionValue::Secret(value.as_deref()))
    }

    pub fn repeated(name: &'static str, flag: &'static str, values: &'a [String]) -> Self {
        Self::new(name, flag, OptionValue::Repeated(values))
    }

    pub fn verbosity(value: Option<Verbosity>) -> Self {
        Self::new("verbosity", "--verbosity", OptionValue::Verbosity(value))
    }
}

/// Settings for one dotnet command.
///
/// `Default` must mean "every option unset": an omitted settings object is
/// replaced by `Default::default()` and then lets the tool decide everything.
pub trait CommandSettings: Default + Debug {
    /// Runner directives and global flags.
    fn common(&self) -> &CommonSettings;

    /// Recognized options, in emission order.
    fn options(&self) -> Vec<CommandOption<'_>>;

    /// Whether these settings leave a confirmation prompt enabled.
    fn interactive_prompt(&self) -> bool {
        false
    }
}
