// CLI module
// Command-line interface, argument parsing, and log level selection

mod args;
mod logging;

pub use args::CliArgs;
pub use logging::{parse_log_level, LOG_LEVEL_ENV};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (missing input path, unknown flag, or --help), clap prints
/// the error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
