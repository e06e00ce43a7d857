//! Include/exclude pattern lists.
//!
//! Patterns are regular expressions searched anywhere in a secret name.
//! Each one is compiled the first time evaluation reaches it, so a malformed
//! entry only fails the run once a key is actually tested against it.

use once_cell::unsync::OnceCell;
use regex::Regex;

use crate::error::{Error, Result};

/// A single lazily compiled pattern.
#[derive(Debug)]
struct Pattern {
    source: String,
    compiled: OnceCell<Regex>,
}

impl Pattern {
    fn new(source: String) -> Self {
        Self {
            source,
            compiled: OnceCell::new(),
        }
    }

    fn is_match(&self, key: &str) -> Result<bool> {
        let regex = self.compiled.get_or_try_init(|| {
            Regex::new(&self.source).map_err(|source| Error::Pattern {
                pattern: self.source.clone(),
                source,
            })
        })?;
        Ok(regex.is_match(key))
    }
}

/// Ordered list of patterns where any match wins.
#[derive(Debug, Default)]
pub struct PatternList {
    patterns: Vec<Pattern>,
}

impl PatternList {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| Pattern::new(p.as_ref().to_string()))
                .collect(),
        }
    }

    /// Whether any pattern matches `key`.
    ///
    /// Patterns are tried in order and evaluation stops at the first match.
    ///
    /// # Errors
    ///
    /// Returns `Error::Pattern` if a pattern reached during evaluation is
    /// not a valid regular expression.
    pub fn matches_any(&self, key: &str) -> Result<bool> {
        for pattern in &self.patterns {
            if pattern.is_match(key)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern sources joined for log output.
    pub fn joined(&self) -> String {
        self.patterns
            .iter()
            .map(|p| p.source.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
