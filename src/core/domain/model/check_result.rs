//! Plugin outcome: the status line and the monitoring state it exits with.

use crate::core::domain::error::OlvmError;
use std::fmt;

/// Monitoring service state, following the Nagios plugin exit code convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    /// The process exit code for this state.
    pub fn exit_code(self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// The single line printed by the plugin together with its state.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    message: String,
    state: ServiceState,
}

impl CheckResult {
    pub fn new(message: impl Into<String>, state: ServiceState) -> Self {
        Self {
            message: message.into(),
            state,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }
}

impl From<OlvmError> for CheckResult {
    fn from(error: OlvmError) -> Self {
        let state = error.state();
        // The missing-argument line has always used "!" instead of ":"
        let separator = match &error {
            OlvmError::MissingArgument => "!",
            _ => ":",
        };
        Self::new(format!("{state}{separator} {error}"), state)
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
