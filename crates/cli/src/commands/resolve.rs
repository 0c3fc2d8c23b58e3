// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qr resolve`: list what typed text could run.

use anyhow::Result;
use qr_adapters::{ProcessAdapter, ShellLister};
use qr_core::{Candidate, Settings};
use qr_engine::Engine;

use crate::output::{self, OutputFormat};

pub fn handle<P: ProcessAdapter, S: ShellLister>(
    engine: &mut Engine<P, S>,
    text: &str,
    settings: Settings,
    format: OutputFormat,
) -> Result<()> {
    // Trailing newline from piped input is not part of the command.
    let text = text.strip_suffix('\n').unwrap_or(text);
    let candidates: Vec<Candidate> = engine.resolve(text, settings).collect();
    let aliases = candidates.iter().filter(|c| c.is_shell_alias()).count();
    tracing::info!(count = candidates.len(), aliases, "resolved");
    let rank = engine.resolver().rank();
    output::print_candidates(&candidates, rank, format, &mut std::io::stdout())
}
