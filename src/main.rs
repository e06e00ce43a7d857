//! secrets-to-env - Export CI secrets as environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secrets_to_env::cli::output::ConsoleReporter;
use secrets_to_env::cli::{run, Cli};
use secrets_to_env::core::constants::LOG_ENV;
use secrets_to_env::core::report::Reporter;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the runner's workflow commands.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secrets_to_env=debug")
        } else {
            EnvFilter::new("secrets_to_env=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut reporter = ConsoleReporter::detect(cli.verbose);

    if let Err(e) = run::execute(&cli, &mut reporter) {
        reporter.failure(&e.to_string());
        std::process::exit(1);
    }
}
