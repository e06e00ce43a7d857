//! Secret bundle.
//!
//! The JSON object of secret names to values handed over by the runner,
//! kept in document order.

use serde::de::Error as _;
use serde_json::{Map, Value};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Ordered mapping of secret name to value.
#[derive(Debug, Default)]
pub struct SecretBundle {
    entries: Vec<(String, Zeroizing<String>)>,
}

impl SecretBundle {
    /// Parse a bundle from its JSON text.
    ///
    /// String values are taken verbatim, `null` becomes an empty string and
    /// any other value is kept as its compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Error::SecretsParse` if `json` is not a JSON object.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(Error::SecretsParse)?;
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::SecretsParse(serde_json::Error::custom(format!(
                    "expected a JSON object, found {}",
                    kind(&other)
                ))))
            }
        };

        Ok(Self::from_map(map))
    }

    fn from_map(map: Map<String, Value>) -> Self {
        let entries = map
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key, Zeroizing::new(value))
            })
            .collect();

        Self { entries }
    }

    /// Build a bundle from name/value pairs.
    ///
    /// A repeated name replaces the earlier value in place.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut bundle = Self::default();
        for (key, value) in pairs {
            let key = key.into();
            let value = Zeroizing::new(value.into());
            match bundle.entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => bundle.entries.push((key, value)),
            }
        }
        bundle
    }

    /// Iterate over `(name, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
