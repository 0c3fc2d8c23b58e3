// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! What a finished process reports back.

use std::fmt;
use std::time::Duration;

/// Exit code reported for a process killed on timeout (matches `timeout(1)`).
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Exit code reported when the program could not be started at all.
pub const FAILED_TO_START_EXIT_CODE: i32 = 127;

/// How a spawned process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Exited normally with this code.
    Exited(i32),
    /// Terminated by this signal.
    Signaled(i32),
    /// Killed by the process facility after running this long.
    TimedOut(Duration),
    /// Never ran (spawn error); stderr carries the reason.
    FailedToStart,
}

impl ExitStatus {
    pub fn success(&self) -> bool {
        matches!(self, ExitStatus::Exited(0))
    }

    /// Integer form: the exit code, `128 + signal`, 124 on timeout, 127 on
    /// spawn failure.
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Exited(code) => *code,
            ExitStatus::Signaled(signal) => 128 + signal,
            ExitStatus::TimedOut(_) => TIMEOUT_EXIT_CODE,
            ExitStatus::FailedToStart => FAILED_TO_START_EXIT_CODE,
        }
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;
        match (status.code(), status.signal()) {
            (Some(code), _) => ExitStatus::Exited(code),
            (None, Some(signal)) => ExitStatus::Signaled(signal),
            (None, None) => ExitStatus::Exited(-1),
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Exited(code) => write!(f, "exit {}", code),
            ExitStatus::Signaled(signal) => write!(f, "signal {}", signal),
            ExitStatus::TimedOut(after) => write!(f, "timed out after {}", format_duration(*after)),
            ExitStatus::FailedToStart => f.write_str("failed to start"),
        }
    }
}

/// Whole seconds, or milliseconds below one second.
pub fn format_duration(d: Duration) -> String {
    if d >= Duration::from_secs(1) {
        format!("{}s", d.as_secs())
    } else {
        format!("{}ms", d.as_millis())
    }
}

/// Status plus captured streams of one finished spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ExecOutcome {
    pub fn new(status: ExitStatus, stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Convenience for an outcome with a plain exit code.
    pub fn exited(code: i32, stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        Self::new(ExitStatus::Exited(code), stdout, stderr)
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
