//! Process runner adapters
//!
//! - [`SystemProcessRunner`]: launches the tool via `std::process`
//! - [`DryRunProcessRunner`]: prints the command line without launching

mod dry_run;
mod system_runner;

pub use dry_run::DryRunProcessRunner;
pub use system_runner::SystemProcessRunner;
