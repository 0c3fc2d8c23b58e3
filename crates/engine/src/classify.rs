// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deciding what, if anything, a finished process reports to the user.

use qr_adapters::LateSink;
use qr_core::{format_duration, ActionKind, ExecOutcome, ExitStatus, OperationError};

/// Longest error message surfaced, in characters.
pub const MAX_ERROR_CHARS: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Error(OperationError),
    Result(String),
}

/// Classify an outcome.
///
/// Only a failure with empty stdout and non-empty stderr is an error; a
/// failing program that printed something still produces a result. A
/// timeout with nothing captured is reported as an error too.
pub fn classify(outcome: &ExecOutcome, wants_stdout_result: bool) -> Option<Verdict> {
    if let ExitStatus::TimedOut(after) = outcome.status {
        if outcome.stdout.is_empty() && outcome.stderr.is_empty() {
            let message = format!("timed out after {}", format_duration(after));
            return Some(Verdict::Error(OperationError::new(message)));
        }
    }
    if !outcome.status.success() && outcome.stdout.is_empty() && !outcome.stderr.is_empty() {
        let message = truncate_chars(&decode(&outcome.stderr), MAX_ERROR_CHARS);
        return Some(Verdict::Error(OperationError::new(message)));
    }
    if wants_stdout_result {
        return Some(Verdict::Result(decode(&outcome.stdout)));
    }
    None
}

/// Decode process output. Invalid UTF-8 becomes U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// At most `max` characters of `s`, never splitting a character.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((end, _)) => s[..end].to_string(),
        None => s.to_string(),
    }
}

/// Post a verdict on the late channel.
pub fn deliver<L: LateSink>(action: ActionKind, verdict: Verdict, sink: &L) {
    match verdict {
        Verdict::Error(error) => sink.register_late_error(action, error),
        Verdict::Result(text) => sink.register_late_result(action, text),
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
