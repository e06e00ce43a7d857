//! Run configuration.
//!
//! Holds the options that drive the key pipeline and the rules for building
//! them from the raw runner inputs.

use std::fmt;
use std::str::FromStr;

use crate::core::constants::PROTECTED_TOKEN;
use crate::error::{Error, Result};

/// Case applied to every exported name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseConversion {
    Lower,
    #[default]
    Upper,
}

impl CaseConversion {
    /// Convert `key` to this case.
    pub fn apply(self, key: &str) -> String {
        match self {
            CaseConversion::Lower => key.to_lowercase(),
            CaseConversion::Upper => key.to_uppercase(),
        }
    }
}

impl FromStr for CaseConversion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lower" => Ok(CaseConversion::Lower),
            "upper" => Ok(CaseConversion::Upper),
            other => Err(Error::UnknownConversion(other.to_string())),
        }
    }
}

impl fmt::Display for CaseConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseConversion::Lower => f.write_str("lower"),
            CaseConversion::Upper => f.write_str("upper"),
        }
    }
}

/// Raw option values as supplied by the runner.
///
/// `None` and empty strings both mean "not supplied".
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub secrets: Option<String>,
    pub prefix: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub convert: Option<String>,
    pub override_existing: Option<String>,
    pub remove_prefix: Option<String>,
    pub trace_log: Option<String>,
}

impl Inputs {
    /// The secrets payload, failing when it was not supplied.
    pub fn require_secrets(&self) -> Result<&str> {
        input(&self.secrets).ok_or(Error::MissingInput("secrets"))
    }
}

/// Immutable pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    prefix: String,
    include: Option<Vec<String>>,
    exclude: Vec<String>,
    conversion: CaseConversion,
    remove_prefix: bool,
    override_existing: bool,
    trace_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            include: None,
            exclude: vec![PROTECTED_TOKEN.to_string()],
            conversion: CaseConversion::default(),
            remove_prefix: true,
            override_existing: false,
            trace_log: false,
        }
    }
}

impl Config {
    /// Build a configuration from runner inputs.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownConversion` if `convert` is neither `lower`
    /// nor `upper`.
    pub fn from_inputs(inputs: &Inputs) -> Result<Self> {
        let mut config = Config::default();

        if let Some(prefix) = input(&inputs.prefix) {
            config.prefix = prefix.to_string();
        }
        if let Some(include) = input(&inputs.include) {
            config.include = Some(split_patterns(include));
        }
        if let Some(exclude) = input(&inputs.exclude) {
            config.exclude.extend(split_patterns(exclude));
        }
        if let Some(convert) = input(&inputs.convert) {
            config.conversion = convert.parse()?;
        }

        config.override_existing = flag(&inputs.override_existing, false);
        config.remove_prefix = flag(&inputs.remove_prefix, true);
        config.trace_log = flag(&inputs.trace_log, false);

        Ok(config)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Restrict exports to keys matching at least one of `patterns`.
    pub fn with_include<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Add `patterns` after the built-in protected token entry.
    pub fn with_exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn with_conversion(mut self, conversion: CaseConversion) -> Self {
        self.conversion = conversion;
        self
    }

    pub fn with_remove_prefix(mut self, remove_prefix: bool) -> Self {
        self.remove_prefix = remove_prefix;
        self
    }

    pub fn with_override(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    pub fn with_trace_log(mut self, trace_log: bool) -> Self {
        self.trace_log = trace_log;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn include(&self) -> Option<&[String]> {
        self.include.as_deref()
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    pub fn conversion(&self) -> CaseConversion {
        self.conversion
    }

    pub fn remove_prefix(&self) -> bool {
        self.remove_prefix
    }

    pub fn override_existing(&self) -> bool {
        self.override_existing
    }

    pub fn trace_log(&self) -> bool {
        self.trace_log
    }
}

/// Split a comma-separated pattern list, trimming each entry.
pub fn split_patterns(list: &str) -> Vec<String> {
    list.split(',').map(|p| p.trim().to_string()).collect()
}

fn input(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// Only the literal `true` enables a flag; anything else supplied disables it.
fn flag(value: &Option<String>, default: bool) -> bool {
    match input(value) {
        Some(v) => v == "true",
        None => default,
    }
}
