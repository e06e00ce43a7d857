//! Shared CLI output helpers and the console reporter.
//!
//! Inside a CI runner messages are written as workflow commands so the
//! runner can classify them. Elsewhere they are printed for a terminal.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: key names
//! - Dimmed: debug and secondary info

use console::style;

use crate::core::constants::GITHUB_ACTIONS;
use crate::core::env::escape_data;
use crate::core::report::{Channel, Reporter};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ Exported secret API_KEY`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Format a key name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Where the console reporter writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// CI runner log, using `::debug::`/`::warning::`/`::error::` commands.
    Runner,
    /// Interactive terminal.
    Terminal { verbose: bool },
}

/// Reporter writing to stdout/stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    target: Target,
}

impl ConsoleReporter {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    /// Runner format when `GITHUB_ACTIONS=true`, terminal otherwise.
    pub fn detect(verbose: bool) -> Self {
        let in_runner = std::env::var(GITHUB_ACTIONS).is_ok_and(|v| v == "true");
        if in_runner {
            Self::new(Target::Runner)
        } else {
            Self::new(Target::Terminal { verbose })
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }
}

impl Reporter for ConsoleReporter {
    fn emit(&mut self, channel: Channel, message: &str) {
        match self.target {
            Target::Runner => match runner_line(channel, message) {
                Some(line) => println!("{line}"),
                None => println!("{message}"),
            },
            Target::Terminal { verbose } => match channel {
                Channel::Debug if verbose => dimmed(message),
                Channel::Debug => {}
                Channel::Info => match message.strip_prefix("Exported secret ") {
                    Some(name) => success(&format!("Exported secret {}", key(name))),
                    None => println!("{message}"),
                },
                Channel::Warning => warn(message),
                Channel::Failure => error(message),
            },
        }
    }
}

/// Workflow command for `channel`, or `None` for plain log lines.
fn runner_line(channel: Channel, message: &str) -> Option<String> {
    let command = match channel {
        Channel::Debug => "debug",
        Channel::Warning => "warning",
        Channel::Failure => "error",
        Channel::Info => return None,
    };
    Some(format!("::{}::{}", command, escape_data(message)))
}
