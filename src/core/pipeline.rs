//! Key pipeline.
//!
//! Decides, for each secret in a bundle, whether it is exported and under
//! which name, then performs the export.
//!
//! Per key, in bundle order:
//!
//! 1. include test (skipped when no include list is configured)
//! 2. exclude test (always contains the protected token entry)
//! 3. prefix rule, then case conversion
//! 4. existing-variable check against the environment
//! 5. export
//!
//! The first error stops the run. Exports that already happened are kept.

use std::fmt;

use tracing::{debug, trace};

use crate::core::bundle::SecretBundle;
use crate::core::config::Config;
use crate::core::env::Environment;
use crate::core::pattern::PatternList;
use crate::core::report::Reporter;
use crate::core::transform::{KeyTransform, PrefixRule};
use crate::error::Result;

/// Why a key was not exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    NotIncluded,
    Excluded,
    AlreadySet,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ExclusionReason::NotIncluded => "not in include list",
            ExclusionReason::Excluded => "in exclude list",
            ExclusionReason::AlreadySet => "already set, override disabled",
        };
        f.write_str(reason)
    }
}

/// Outcome for a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishDecision {
    Excluded(ExclusionReason),
    Published(String),
}

/// Decisions for every key processed, in bundle order.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    decisions: Vec<(String, PublishDecision)>,
}

impl Outcome {
    fn record(&mut self, key: &str, decision: PublishDecision) {
        self.decisions.push((key.to_string(), decision));
    }

    pub fn decisions(&self) -> &[(String, PublishDecision)] {
        &self.decisions
    }

    /// Decision taken for the secret named `key`.
    pub fn decision(&self, key: &str) -> Option<&PublishDecision> {
        self.decisions
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, d)| d)
    }

    /// Exported names, in export order.
    pub fn published(&self) -> Vec<&str> {
        self.decisions
            .iter()
            .filter_map(|(_, d)| match d {
                PublishDecision::Published(name) => Some(name.as_str()),
                PublishDecision::Excluded(_) => None,
            })
            .collect()
    }

    pub fn published_count(&self) -> usize {
        self.published().len()
    }

    pub fn excluded_count(&self) -> usize {
        self.decisions.len() - self.published_count()
    }
}

/// Compiled view of a [`Config`] ready to process bundles.
#[derive(Debug)]
pub struct Pipeline {
    include: Option<PatternList>,
    exclude: PatternList,
    transform: KeyTransform,
    override_existing: bool,
    trace_log: bool,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        let include = config
            .include()
            .filter(|patterns| !patterns.is_empty())
            .map(PatternList::new);

        Self {
            include,
            exclude: PatternList::new(config.exclude()),
            transform: KeyTransform::new(config),
            override_existing: config.override_existing(),
            trace_log: config.trace_log(),
        }
    }

    /// Process every key of `bundle`, exporting accepted ones into `env`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Pattern` when a pattern reached during evaluation is
    /// invalid, or the environment's error when an export fails. Keys
    /// exported before the error stay exported.
    pub fn run(
        &self,
        bundle: &SecretBundle,
        env: &mut dyn Environment,
        reporter: &mut dyn Reporter,
    ) -> Result<Outcome> {
        let include = match &self.include {
            Some(list) => list.joined(),
            None => "(all keys)".to_string(),
        };
        reporter.debug(&format!("Using include list: {include}"));
        reporter.debug(&format!("Using exclude list: {}", self.exclude.joined()));

        let mut outcome = Outcome::default();

        for (key, value) in bundle.iter() {
            let decision = self.process(key, value, env, reporter)?;
            trace!(key, ?decision, "key processed");
            outcome.record(key, decision);
        }

        debug!(
            total = bundle.len(),
            published = outcome.published_count(),
            excluded = outcome.excluded_count(),
            "pipeline finished"
        );

        Ok(outcome)
    }

    fn process(
        &self,
        key: &str,
        value: &str,
        env: &mut dyn Environment,
        reporter: &mut dyn Reporter,
    ) -> Result<PublishDecision> {
        if let Some(include) = &self.include {
            if !include.matches_any(key)? {
                if self.trace_log {
                    reporter.info(&format!("excluding {key} as not in include list"));
                }
                return Ok(PublishDecision::Excluded(ExclusionReason::NotIncluded));
            }
        }

        if self.exclude.matches_any(key)? {
            if self.trace_log {
                reporter.debug(&format!("excluding {key} as in exclude list"));
            }
            return Ok(PublishDecision::Excluded(ExclusionReason::Excluded));
        }

        // Logged whenever removal is enabled, even with an empty prefix.
        if self.trace_log && matches!(self.transform.prefix_rule(), PrefixRule::Remove(_)) {
            reporter.info(&format!("removing prefix from {key}"));
        }
        let name = self.transform.rename(key);

        // The runner treats an empty variable the same as an unset one.
        if env.get(&name).is_some_and(|existing| !existing.is_empty()) {
            if self.override_existing {
                reporter.warning(&format!("Will re-write \"{name}\" environment variable."));
            } else {
                reporter.info(&format!("Skip overwriting secret {name}"));
                return Ok(PublishDecision::Excluded(ExclusionReason::AlreadySet));
            }
        }

        env.set(&name, value)?;
        reporter.info(&format!("Exported secret {name}"));

        Ok(PublishDecision::Published(name))
    }
}

/// Build a pipeline from `config` and run it once.
pub fn run(
    config: &Config,
    bundle: &SecretBundle,
    env: &mut dyn Environment,
    reporter: &mut dyn Reporter,
) -> Result<Outcome> {
    Pipeline::new(config).run(bundle, env, reporter)
}
