// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qr run`, `qr exec`, `qr pass`, `qr write`, `qr filter`.
//!
//! Each handler launches its processes, waits for them, then prints whatever
//! was posted on the late channel.

use std::path::Path;

use anyhow::Result;
use qr_adapters::{ChannelSink, LateEvent, ProcessAdapter, ShellLister, SpawnHandle};
use qr_core::{ActionKind, Item, Settings, Target};
use qr_engine::Engine;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::exit_error::{ExitError, COMMAND_FAILED, NO_TARGET};
use crate::output;

/// Interpret a target argument.
///
/// Anything containing a slash is a file path and must be a runnable file.
/// Otherwise the argument is resolved like typed text and the first
/// candidate wins.
pub fn parse_target<P: ProcessAdapter, S: ShellLister>(
    engine: &mut Engine<P, S>,
    arg: &str,
    settings: Settings,
) -> Result<Target> {
    if !arg.contains(char::is_whitespace) && arg.contains('/') {
        return Target::file(arg).map_err(|e| no_target(e.to_string()));
    }
    match engine.resolve(arg, settings).next() {
        Some(candidate) => Ok(Target::from(candidate)),
        None => Err(no_target(format!("no command found for {arg:?}"))),
    }
}

fn no_target(message: String) -> anyhow::Error {
    ExitError::new(NO_TARGET, message).into()
}

/// Existing paths become file items; anything else is text.
pub fn parse_item(arg: &str) -> Item {
    if Path::new(arg).exists() {
        Item::file(arg)
    } else {
        Item::text(arg)
    }
}

/// Resolve every target argument, then perform `action` with all of them.
///
/// Nothing is launched unless every target resolves and the items suit
/// the action.
pub async fn perform<P: ProcessAdapter, S: ShellLister>(
    engine: &mut Engine<P, S>,
    action: ActionKind,
    items: &[Item],
    targets: &[String],
    settings: Settings,
) -> Result<()> {
    let mut resolved = Vec::with_capacity(targets.len());
    for arg in targets {
        resolved.push(parse_target(engine, arg, settings)?);
    }
    let (sink, rx) = ChannelSink::new();
    let handles = engine.perform(action, items, &resolved, &sink)?;
    tracing::info!(%action, spawned = handles.len(), "launched");
    report(handles, sink, rx).await
}

/// Wait for every spawn, then print the late events in arrival order.
async fn report(
    handles: Vec<SpawnHandle>,
    sink: ChannelSink,
    mut rx: UnboundedReceiver<LateEvent>,
) -> Result<()> {
    for handle in handles {
        handle.finished().await;
    }
    // Callbacks have all returned; closing our sender ends the stream.
    drop(sink);

    let (mut out, mut err) = (std::io::stdout(), std::io::stderr());
    let mut failures = 0;
    while let Some(event) = rx.recv().await {
        if output::print_late_event(&event, &mut out, &mut err)? {
            failures += 1;
        }
    }
    if failures > 0 {
        return Err(ExitError::silent(COMMAND_FAILED).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "act_tests.rs"]
mod tests;
