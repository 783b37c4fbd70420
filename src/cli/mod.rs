//! CLI command implementations

mod prompt;
mod publish;
mod report;
mod style;

pub use publish::{PublishOptions, run_interactive, run_publish};
pub use report::CliReport;
