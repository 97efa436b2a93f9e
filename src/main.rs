//! required-tasks CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use required_tasks::cli::{Cli, CommandDispatcher};
use required_tasks::platform::is_github_actions;
use required_tasks::report::{create_reporter, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so JSON output on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("required_tasks=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("required_tasks=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("required-tasks starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut reporter = create_reporter(is_github_actions(), output_mode);

    match CommandDispatcher::new().dispatch(&cli, reporter.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            reporter.set_failed(&e.to_string());
            ExitCode::from(1)
        }
    }
}
