//! Process result types

pub mod value_objects;

pub use value_objects::{CommandOutcome, NO_EXIT_CODE, ProcessResult};
