// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved, runnable interpretations of free-form text.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Program that runs candidate command lines (`sh -c <line>`).
pub const RUN_SHELL: &str = "sh";

/// Interactive shell that knows the user's aliases and functions.
pub const INTERACTIVE_SHELL: &str = "bash";

/// Prologue that makes aliases usable inside a `-c` string.
pub const EXPAND_ALIASES: &str = "shopt -s expand_aliases;";

/// Icon name used when no file-based icon is available.
pub const FALLBACK_ICON: &str = "exec";

/// A runnable interpretation of the text the user typed.
///
/// The variant is decided once by the resolver. Downstream code matches on
/// it instead of re-inspecting the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Candidate {
    /// A program found on disk. `path` is the resolved file.
    Executable { text: String, path: PathBuf },
    /// An alias or function that only the interactive shell can expand.
    ShellAlias { text: String, command_line: String },
}

impl Candidate {
    pub fn executable(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Candidate::Executable {
            text: text.into(),
            path: path.into(),
        }
    }

    /// Wrap `text` in an interactive-shell invocation with alias expansion on.
    ///
    /// Words are re-joined with single spaces, so runs of whitespace in the
    /// typed text collapse.
    pub fn shell_alias(text: impl Into<String>) -> Self {
        let text = text.into();
        let words = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let command_line = format!("{INTERACTIVE_SHELL} -i -c \"{EXPAND_ALIASES} {words}\"");
        Candidate::ShellAlias { text, command_line }
    }

    /// The text the user typed; also the visible label.
    pub fn text(&self) -> &str {
        match self {
            Candidate::Executable { text, .. } | Candidate::ShellAlias { text, .. } => text,
        }
    }

    /// The line handed to `sh -c` when this candidate runs.
    pub fn command_line(&self) -> &str {
        match self {
            Candidate::Executable { text, .. } => text,
            Candidate::ShellAlias { command_line, .. } => command_line,
        }
    }

    pub fn is_shell_alias(&self) -> bool {
        matches!(self, Candidate::ShellAlias { .. })
    }

    /// Secondary line shown under the label.
    pub fn description(&self) -> String {
        match self {
            Candidate::Executable { text, path } => {
                let args = text
                    .split_whitespace()
                    .skip(1)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{} {}", path.display(), args)
            }
            Candidate::ShellAlias { command_line, .. } => command_line.clone(),
        }
    }

    /// File to derive an icon from. Shell aliases have no backing file.
    pub fn icon_file(&self) -> Option<&Path> {
        match self {
            Candidate::Executable { path, .. } => Some(path),
            Candidate::ShellAlias { .. } => None,
        }
    }

    pub fn icon_name(&self) -> &'static str {
        FALLBACK_ICON
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
#[path = "candidate_tests.rs"]
mod tests;
