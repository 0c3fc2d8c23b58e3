// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use qr_adapters::LateEvent;
use qr_core::{ActionKind, Candidate};
use qr_engine::SOURCE_NAME;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How one candidate is presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateView {
    pub label: String,
    pub description: String,
    pub icon_name: String,
    pub icon_file: Option<String>,
    pub source: &'static str,
    pub rank: i32,
    #[serde(flatten)]
    pub candidate: Candidate,
}

impl CandidateView {
    pub fn new(candidate: &Candidate, rank: i32) -> Self {
        Self {
            label: candidate.text().to_string(),
            description: candidate.description(),
            icon_name: candidate.icon_name().to_string(),
            icon_file: candidate.icon_file().map(|p| p.display().to_string()),
            source: SOURCE_NAME,
            rank,
            candidate: candidate.clone(),
        }
    }
}

/// Print resolved candidates as a two-column listing or JSON.
pub fn print_candidates(
    candidates: &[Candidate],
    rank: i32,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let views: Vec<CandidateView> = candidates
        .iter()
        .map(|candidate| CandidateView::new(candidate, rank))
        .collect();
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&views)?)?;
        }
        OutputFormat::Text => {
            let width = views
                .iter()
                .map(|v| v.label.chars().count())
                .max()
                .unwrap_or(0);
            for view in &views {
                let description = view.description.trim_end();
                writeln!(out, "{:<width$}  {description}", view.label)?;
            }
        }
    }
    Ok(())
}

/// How one action is presented in `qr actions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionView {
    pub command: &'static str,
    pub label: String,
    pub description: String,
    pub timeout_secs: Option<u64>,
    pub posts_output: bool,
}

impl From<ActionKind> for ActionView {
    fn from(action: ActionKind) -> Self {
        Self {
            command: verb(action),
            label: action.label(),
            description: action.description(),
            timeout_secs: action.timeout().map(|t| t.as_secs()),
            posts_output: action.wants_stdout_result(),
        }
    }
}

/// Print the actions as a three-column listing or JSON.
pub fn print_actions(
    actions: &[ActionKind],
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let views: Vec<ActionView> = actions.iter().copied().map(ActionView::from).collect();
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&views)?)?;
        }
        OutputFormat::Text => {
            let width = views
                .iter()
                .map(|v| v.label.chars().count())
                .max()
                .unwrap_or(0);
            for view in &views {
                let (command, label) = (view.command, &view.label);
                writeln!(out, "{command:<6}  {label:<width$}  {}", view.description)?;
            }
        }
    }
    Ok(())
}

/// Print one late event: results to `out` as-is, errors to `err`.
///
/// Returns true if the event was an error.
pub fn print_late_event(
    event: &LateEvent,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<bool> {
    match event {
        LateEvent::Result { text, .. } => {
            write!(out, "{text}")?;
            if !text.is_empty() && !text.ends_with('\n') {
                writeln!(out)?;
            }
            Ok(false)
        }
        LateEvent::Error { action, error } => {
            let message = error.message().trim_end();
            writeln!(err, "qr: {}: {message}", verb(*action))?;
            Ok(true)
        }
    }
}

/// Subcommand name for an action, used as the prefix of error lines.
pub fn verb(action: ActionKind) -> &'static str {
    match action {
        ActionKind::RunAndCapture => "run",
        ActionKind::Execute => "exec",
        ActionKind::PassToCommand => "pass",
        ActionKind::WriteToCommand => "write",
        ActionKind::FilterThroughCommand => "filter",
    }
}
