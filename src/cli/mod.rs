// CLI module
// Command-line interface, argument parsing and log setup

mod args;

pub use args::CliArgs;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing required arguments, or
/// --help), clap displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber
///
/// The filter comes from `RUST_LOG`, defaulting to `warn`, so stdout carries
/// only the report.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
