//! Name transformation.
//!
//! Turns a secret name into the exported variable name: prefix handling
//! first, then case conversion.

use crate::core::config::{CaseConversion, Config};

/// How the configured prefix is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixRule {
    /// Drop the first occurrence of the prefix, wherever it appears.
    Remove(String),
    /// Prepend the prefix.
    Add(String),
    /// Leave the name alone.
    Keep,
}

impl PrefixRule {
    pub fn from_config(config: &Config) -> Self {
        if config.remove_prefix() {
            PrefixRule::Remove(config.prefix().to_string())
        } else if !config.prefix().is_empty() {
            PrefixRule::Add(config.prefix().to_string())
        } else {
            PrefixRule::Keep
        }
    }

    pub fn apply(&self, key: &str) -> String {
        match self {
            PrefixRule::Remove(prefix) if !prefix.is_empty() => {
                key.replacen(prefix.as_str(), "", 1)
            }
            PrefixRule::Add(prefix) => format!("{prefix}{key}"),
            _ => key.to_string(),
        }
    }
}

/// Prefix rule and case conversion applied in sequence.
#[derive(Debug, Clone)]
pub struct KeyTransform {
    prefix: PrefixRule,
    conversion: CaseConversion,
}

impl KeyTransform {
    pub fn new(config: &Config) -> Self {
        Self {
            prefix: PrefixRule::from_config(config),
            conversion: config.conversion(),
        }
    }

    pub fn prefix_rule(&self) -> &PrefixRule {
        &self.prefix
    }

    /// Exported name for `key`.
    pub fn rename(&self, key: &str) -> String {
        self.conversion.apply(&self.prefix.apply(key))
    }
}
