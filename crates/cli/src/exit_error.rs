// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit codes of the `qr` binary.
//!
//! A target that cannot be found ends the run with [`NO_TARGET`]. A launched
//! command that posts an error ends it with [`COMMAND_FAILED`] once every
//! posted event has been printed.

use std::fmt;

/// Exit code when no runnable target could be found.
pub const NO_TARGET: i32 = 2;

/// Exit code when a launched command reported an error.
pub const COMMAND_FAILED: i32 = 1;

/// Failure with the code `qr` exits with and the line printed before it.
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Failure whose details were already printed.
    pub fn silent(code: i32) -> Self {
        Self::new(code, "")
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
