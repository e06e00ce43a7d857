//! Command-line interface.
//!
//! Every option falls back to the `INPUT_<NAME>` variable the CI runner sets
//! for action inputs, so the binary runs unchanged as an action step.

pub mod output;
pub mod run;

use clap::Parser;

use crate::core::config::Inputs;

/// secrets-to-env - Export CI secrets as environment variables.
#[derive(Parser, Debug, Default)]
#[command(
    name = "secrets-to-env",
    about = "Export CI secrets as environment variables for later pipeline steps",
    version
)]
pub struct Cli {
    /// JSON object of secret names to values, e.g. `${{ toJSON(secrets) }}`
    #[arg(long, env = "INPUT_SECRETS", hide_env_values = true)]
    pub secrets: Option<String>,

    /// Prefix to remove from (or, with --removeprefix false, add to) names
    #[arg(long, env = "INPUT_PREFIX")]
    pub prefix: Option<String>,

    /// Comma-separated regex patterns; only matching secrets are exported
    #[arg(long, env = "INPUT_INCLUDE")]
    pub include: Option<String>,

    /// Comma-separated regex patterns; matching secrets are never exported
    #[arg(long, env = "INPUT_EXCLUDE")]
    pub exclude: Option<String>,

    /// Case of exported names: lower or upper (default: upper)
    #[arg(long, env = "INPUT_CONVERT")]
    pub convert: Option<String>,

    /// Overwrite variables that are already set (true/false, default: false)
    #[arg(long = "override", env = "INPUT_OVERRIDE")]
    pub override_existing: Option<String>,

    /// Remove the prefix instead of adding it (true/false, default: true)
    #[arg(long = "removeprefix", env = "INPUT_REMOVEPREFIX")]
    pub remove_prefix: Option<String>,

    /// Log why each secret was skipped (true/false, default: false)
    #[arg(long = "tracelog", env = "INPUT_TRACELOG")]
    pub trace_log: Option<String>,

    /// Show what would be exported without exporting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run plan as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Raw inputs for building the run configuration.
    pub fn inputs(&self) -> Inputs {
        Inputs {
            secrets: self.secrets.clone(),
            prefix: self.prefix.clone(),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            convert: self.convert.clone(),
            override_existing: self.override_existing.clone(),
            remove_prefix: self.remove_prefix.clone(),
            trace_log: self.trace_log.clone(),
        }
    }
}
