//! Ordered argument list builder

use super::argument::Argument;
use std::fmt;

/// Ordered sequence of [`Argument`]s making up one command line.
///
/// Built fresh for each invocation and consumed when the process starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessArguments {
    args: Vec<Argument>,
}

impl ProcessArguments {
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    pub fn push(&mut self, argument: Argument) -> &mut Self {
        self.args.push(argument);
        self
    }

    /// Append a token verbatim (flags, verbs).
    pub fn append(&mut self, value: impl Into<String>) -> &mut Self {
        self.push(Argument::text(value))
    }

    /// Append a user-supplied value, quoted when it needs to be.
    pub fn append_quoted(&mut self, value: impl Into<String>) -> &mut Self {
        self.push(Argument::quoted(value))
    }

    /// Append a credential that must never show up in logs.
    pub fn append_secret(&mut self, value: impl Into<String>) -> &mut Self {
        self.push(Argument::secret(value))
    }

    /// Append `flag value`.
    pub fn append_switch(&mut self, flag: &str, value: impl Into<String>) -> &mut Self {
        self.append(flag).append_quoted(value)
    }

    /// Append `flag <secret>`.
    pub fn append_switch_secret(&mut self, flag: &str, value: impl Into<String>) -> &mut Self {
        self.append(flag).append_secret(value)
    }

    pub fn extend_from(&mut self, other: &ProcessArguments) -> &mut Self {
        self.args.extend(other.args.iter().cloned());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.args.iter()
    }

    /// Serialized token sequence (quoted form).
    pub fn tokens(&self) -> Vec<String> {
        self.args.iter().map(Argument::render).collect()
    }

    /// Raw values for the OS argv; the platform layer does its own escaping.
    pub fn argv(&self) -> Vec<String> {
        self.args.iter().map(|a| a.value().to_string()).collect()
    }

    /// Full command line with secrets intact.
    pub fn render(&self) -> String {
        self.tokens().join(" ")
    }

    /// Full command line with secrets redacted.
    pub fn render_safe(&self) -> String {
        self.args
            .iter()
            .map(Argument::render_safe)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ProcessArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_safe())
    }
}

/// Free-form values collected into a list are treated as user input and quoted.
impl<S: Into<String>> FromIterator<S> for ProcessArguments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().map(Argument::quoted).collect(),
        }
    }
}

impl From<Vec<Argument>> for ProcessArguments {
    fn from(args: Vec<Argument>) -> Self {
        Self { args }
    }
}
