//! Single command-line argument value object

use std::fmt;

/// Placeholder shown instead of secret values in logs and error messages.
pub const REDACTED: &str = "[REDACTED]";

/// Characters that force a value to be wrapped in quotes.
const SHELL_SIGNIFICANT: &[char] = &[
    '"', '\'', '\\', '$', '`', '&', '|', ';', '<', '>', '(', ')', '*', '?', '[', ']', '{', '}',
    '#', '~', '!',
];

/// One token of a command line.
///
/// | Variant | `render()` | `render_safe()` |
/// |---------|-----------|-----------------|
/// | `Text` | verbatim | verbatim |
/// | `Quoted` | quoted when needed | quoted when needed |
/// | `Secret` | quoted when needed | `[REDACTED]` |
///
/// Flags are `Text`; user-supplied values (paths, names, free-form
/// arguments) are `Quoted`; credentials are `Secret`.
#[derive(Clone, PartialEq, Eq)]
pub enum Argument {
    Text(String),
    Quoted(String),
    Secret(String),
}

impl Argument {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Self::Quoted(value.into())
    }

    pub fn secret(value: impl Into<String>) -> Self {
        Self::Secret(value.into())
    }

    /// The raw value handed to the OS, without any quoting.
    pub fn value(&self) -> &str {
        match self {
            Self::Text(v) | Self::Quoted(v) | Self::Secret(v) => v,
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Secret(_))
    }

    /// Command-line form of this token.
    pub fn render(&self) -> String {
        match self {
            Self::Text(v) => v.clone(),
            Self::Quoted(v) | Self::Secret(v) => quote_if_needed(v),
        }
    }

    /// Like [`render`](Self::render) but with secrets redacted.
    pub fn render_safe(&self) -> String {
        match self {
            Self::Secret(_) => REDACTED.to_string(),
            other => other.render(),
        }
    }
}

// Debug must not leak secrets either.
impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::Quoted(v) => f.debug_tuple("Quoted").field(v).finish(),
            Self::Secret(_) => f.debug_tuple("Secret").field(&REDACTED).finish(),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_safe())
    }
}

/// Whether `value` must be quoted to survive shell word splitting.
pub fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || SHELL_SIGNIFICANT.contains(&c))
}

/// Wrap `value` in double quotes, escaping `\`, `"`, `$` and `` ` ``.
///
/// A POSIX shell parses the result back to exactly `value`.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

pub fn quote_if_needed(value: &str) -> String {
    if needs_quoting(value) {
        quote(value)
    } else {
        value.to_string()
    }
}
