//! Argument model: the token sequence handed to the external tool.
//!
//! ```text
//! Argument::Text("--output")  ─┐
//! Argument::Quoted("./a b")   ─┼─▶ ProcessArguments ─┬─ tokens()      ["--output", "\"./a b\""]
//! Argument::Secret("oy2...")  ─┘                     ├─ argv()        raw values for the OS
//!                                                    └─ render_safe() "--output \"./a b\" [REDACTED]"
//! ```

mod argument;
mod builder;

pub use argument::{Argument, REDACTED, needs_quoting, quote, quote_if_needed};
pub use builder::ProcessArguments;
