//! Environment collaborator.
//!
//! The pipeline reads a variable right before deciding to write it and
//! never touches the process environment directly.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::constants::{DELIMITER_PREFIX, GITHUB_ENV};
use crate::error::{Error, Result};

/// Read/write access to environment variables.
pub trait Environment {
    /// Current value of `name`, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Publish `name` with `value` for later pipeline steps.
    fn set(&mut self, name: &str, value: &str) -> Result<()>;
}

/// The host process environment.
///
/// Exports are made visible to later steps through the runner's
/// `GITHUB_ENV` file, or through the legacy `set-env` command when no
/// such file is configured. The current process sees them immediately.
#[derive(Debug, Default)]
pub struct ProcessEnv {
    env_file: Option<PathBuf>,
}

impl ProcessEnv {
    /// Use the env file named by `GITHUB_ENV`, if any.
    pub fn from_runner() -> Self {
        let env_file = std::env::var_os(GITHUB_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self { env_file }
    }

    /// Append exports to `path` instead of the runner-provided file.
    pub fn with_env_file(path: impl Into<PathBuf>) -> Self {
        Self {
            env_file: Some(path.into()),
        }
    }

    fn append_to_file(&self, path: &Path, name: &str, value: &str) -> Result<()> {
        let entry = file_entry(name, value)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(entry.as_bytes())?;
        trace!(path = %path.display(), "appended export to env file");
        Ok(())
    }
}

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        check_variable(name, value)?;
        match &self.env_file {
            Some(path) => self.append_to_file(path, name, value)?,
            None => {
                debug!("no env file configured, falling back to set-env command");
                println!("{}", set_env_command(name, value));
            }
        }
        std::env::set_var(name, value);
        Ok(())
    }
}

/// In-memory environment for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
    exported: Vec<(String, String)>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
            exported: Vec::new(),
        }
    }

    /// Seed a variable as if it had been set before the run.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Every `set` call so far, in call order.
    pub fn exported(&self) -> &[(String, String)] {
        &self.exported
    }

    /// Exported variables as a map; a later export of the same name wins.
    pub fn exported_map(&self) -> HashMap<String, String> {
        self.exported.iter().cloned().collect()
    }
}

impl Environment for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.vars.insert(name.to_string(), value.to_string());
        self.exported.push((name.to_string(), value.to_string()));
        Ok(())
    }
}

/// Reject names and values the host environment cannot hold.
///
/// Runs before anything is written so a bad key never reaches the env file.
fn check_variable(name: &str, value: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.contains('=') {
        "name contains '='"
    } else if name.contains('\0') {
        "name contains a NUL byte"
    } else if value.contains('\0') {
        "value contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(Error::Export {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

/// Heredoc-style entry for the `GITHUB_ENV` file.
///
/// The delimiter is random per entry and must not occur in the name or
/// the value.
fn file_entry(name: &str, value: &str) -> Result<String> {
    let delimiter = format!("{}{}", DELIMITER_PREFIX, uuid::Uuid::new_v4());

    if name.contains(&delimiter) {
        return Err(Error::Export {
            name: name.to_string(),
            reason: format!("name should not contain the delimiter \"{delimiter}\""),
        });
    }
    if value.contains(&delimiter) {
        return Err(Error::Export {
            name: name.to_string(),
            reason: format!("value should not contain the delimiter \"{delimiter}\""),
        });
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Legacy `::set-env` workflow command.
fn set_env_command(name: &str, value: &str) -> String {
    format!(
        "::set-env name={}::{}",
        escape_property(name),
        escape_data(value)
    )
}

/// Escape a workflow command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Escape a workflow command property value.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
