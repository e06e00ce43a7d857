//! Log collaborator.
//!
//! Four independent message channels, matching what the CI runner shows to
//! the user. Internal diagnostics go through `tracing` instead.

use std::fmt;

/// Message channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Debug,
    Info,
    Warning,
    Failure,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Debug => "debug",
            Channel::Info => "info",
            Channel::Warning => "warning",
            Channel::Failure => "failure",
        };
        f.write_str(name)
    }
}

/// Sink for user-facing run messages.
pub trait Reporter {
    fn emit(&mut self, channel: Channel, message: &str);

    fn debug(&mut self, message: &str) {
        self.emit(Channel::Debug, message);
    }

    fn info(&mut self, message: &str) {
        self.emit(Channel::Info, message);
    }

    fn warning(&mut self, message: &str) {
        self.emit(Channel::Warning, message);
    }

    fn failure(&mut self, message: &str) {
        self.emit(Channel::Failure, message);
    }
}

/// Keeps every message in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Vec<(Channel, String)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[(Channel, String)] {
        &self.events
    }

    /// Messages sent to `channel`, in order.
    pub fn messages(&self, channel: Channel) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Whether any message on any channel contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.events.iter().any(|(_, m)| m.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn emit(&mut self, channel: Channel, message: &str) {
        self.events.push((channel, message.to_string()));
    }
}
