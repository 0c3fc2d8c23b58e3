// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Descriptors for the ways text and programs are combined.

use std::fmt;
use std::time::Duration;

use crate::Item;

/// Timeout applied to run-and-capture.
pub const RUN_AND_CAPTURE_TIMEOUT: Duration = Duration::from_secs(15);

/// Marker appended to descriptions of actions that run in a subshell.
const SUBSHELL_MARK: &str = " \u{2699}";

/// One operation the engine can perform.
///
/// Everything that differs between operations is a property of the kind;
/// there is no per-action type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Run the target and show its output.
    RunAndCapture,
    /// Run the target with no time limit. Only errors are posted.
    Execute,
    /// Run each target with the items appended as arguments.
    PassToCommand,
    /// Run the target with the item text on stdin, output discarded.
    WriteToCommand,
    /// Run the target with the item text on stdin and show its output.
    FilterThroughCommand,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::RunAndCapture => "Run (Get Output)",
            ActionKind::Execute => "Run",
            ActionKind::PassToCommand => "Pass to Command...",
            ActionKind::WriteToCommand => "Write to Command...",
            ActionKind::FilterThroughCommand => "Filter through Command...",
        })
    }
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::RunAndCapture,
        ActionKind::Execute,
        ActionKind::PassToCommand,
        ActionKind::WriteToCommand,
        ActionKind::FilterThroughCommand,
    ];

    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Secondary line for listings. Subshell actions carry a gear mark.
    pub fn description(&self) -> String {
        let text = match self {
            ActionKind::RunAndCapture => "Run program and return its output",
            ActionKind::Execute => "Run this program",
            ActionKind::PassToCommand => "Run program with object as an additional parameter",
            ActionKind::WriteToCommand | ActionKind::FilterThroughCommand => {
                "Run program and supply text on the standard input"
            }
        };
        match self {
            ActionKind::Execute => text.to_string(),
            _ => format!("{text}{SUBSHELL_MARK}"),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self {
            ActionKind::RunAndCapture => Some(RUN_AND_CAPTURE_TIMEOUT),
            _ => None,
        }
    }

    /// Whether successful stdout is posted as a late result.
    pub fn wants_stdout_result(&self) -> bool {
        matches!(
            self,
            ActionKind::RunAndCapture | ActionKind::FilterThroughCommand
        )
    }

    pub fn feeds_stdin(&self) -> bool {
        matches!(
            self,
            ActionKind::WriteToCommand | ActionKind::FilterThroughCommand
        )
    }

    /// Whether the action operates on items besides the target.
    pub fn requires_target(&self) -> bool {
        !matches!(self, ActionKind::RunAndCapture | ActionKind::Execute)
    }

    /// Whether `item` is an acceptable object for this action.
    pub fn accepts(&self, item: &Item) -> bool {
        match self {
            ActionKind::PassToCommand => true,
            ActionKind::WriteToCommand | ActionKind::FilterThroughCommand => item.is_text(),
            ActionKind::RunAndCapture | ActionKind::Execute => false,
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
