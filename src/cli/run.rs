//! Run command.
//!
//! Builds the configuration and bundle from the inputs and runs the key
//! pipeline against the process environment.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::cli::output;
use crate::cli::Cli;
use crate::core::bundle::SecretBundle;
use crate::core::config::Config;
use crate::core::env::{Environment, MemoryEnv, ProcessEnv};
use crate::core::pipeline::{self, Outcome, PublishDecision};
use crate::core::report::{Channel, RecordingReporter, Reporter};
use crate::error::Result;

/// Execute a run.
///
/// With `--dry-run` the pipeline works on a snapshot of the process
/// environment and the resulting plan is printed. Pipeline messages are
/// passed on, except export confirmations since nothing is exported.
///
/// # Errors
///
/// Returns the first error that aborted the run.
pub fn execute(cli: &Cli, reporter: &mut dyn Reporter) -> Result<Outcome> {
    let inputs = cli.inputs();
    let secrets = inputs.require_secrets()?;
    let config = Config::from_inputs(&inputs)?;
    let bundle = SecretBundle::parse(secrets)?;

    debug!(
        keys = bundle.len(),
        conversion = %config.conversion(),
        dry_run = cli.dry_run,
        "starting run"
    );

    if cli.dry_run {
        let before = MemoryEnv::from_process();
        let mut env = before.clone();
        let mut recorder = RecordingReporter::new();
        let outcome = pipeline::run(&config, &bundle, &mut env, &mut recorder)?;

        // JSON output owns stdout; overwrites are flagged in the plan instead.
        if !cli.json {
            forward(&recorder, reporter);
        }
        print_plan(&plan(&outcome, &bundle, &before), cli.json)?;
        return Ok(outcome);
    }

    let mut env = ProcessEnv::from_runner();
    pipeline::run(&config, &bundle, &mut env, reporter)
}

/// One row of the dry-run plan.
#[derive(Debug, Serialize)]
struct PlanEntry<'a> {
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    export_as: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    overwrites: bool,
}

fn forward(recorder: &RecordingReporter, reporter: &mut dyn Reporter) {
    for (channel, message) in recorder.events() {
        if *channel == Channel::Info && message.starts_with("Exported secret ") {
            continue;
        }
        reporter.emit(*channel, message);
    }
}

/// Plan rows for `outcome`.
///
/// A published name overwrites when it held a non-empty value before the
/// run, or when an earlier key in the bundle exported a non-empty value
/// under the same name.
fn plan<'a>(
    outcome: &'a Outcome,
    bundle: &SecretBundle,
    before: &MemoryEnv,
) -> Vec<PlanEntry<'a>> {
    let mut written = HashSet::new();

    outcome
        .decisions()
        .iter()
        .map(|(key, decision)| match decision {
            PublishDecision::Published(name) => {
                let overwrites = before.get(name).is_some_and(|v| !v.is_empty())
                    || written.contains(name.as_str());
                if bundle.get(key).is_some_and(|v| !v.is_empty()) {
                    written.insert(name.as_str());
                }
                PlanEntry {
                    key: key.as_str(),
                    export_as: Some(name.as_str()),
                    skipped: None,
                    overwrites,
                }
            }
            PublishDecision::Excluded(reason) => PlanEntry {
                key: key.as_str(),
                export_as: None,
                skipped: Some(reason.to_string()),
                overwrites: false,
            },
        })
        .collect()
}

fn print_plan(entries: &[PlanEntry<'_>], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        match (entry.export_as, &entry.skipped) {
            (Some(name), _) if entry.overwrites => output::success(&format!(
                "{} -> {} (overwrites existing value)",
                entry.key,
                output::key(name)
            )),
            (Some(name), _) => {
                output::success(&format!("{} -> {}", entry.key, output::key(name)))
            }
            (None, Some(reason)) => output::dimmed(&format!("- {} ({})", entry.key, reason)),
            (None, None) => {}
        }
    }
    let published = entries.iter().filter(|e| e.export_as.is_some()).count();
    output::dimmed(&format!(
        "{} to export, {} skipped (dry run)",
        published,
        entries.len() - published
    ));

    Ok(())
}
