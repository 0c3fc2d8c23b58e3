// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The command actions.
//!
//! Every action returns as soon as its process is started. What the process
//! eventually reports goes to the late sink from the exit callback.

use qr_adapters::{LateSink, ProcessAdapter, ShellLister, SpawnHandle};
use qr_core::{ActionKind, Invocation, Item, Settings, Target};

use crate::classify::{classify, deliver};
use crate::discovery::{Candidates, Resolver, SearchPath};
use crate::invocation::{self, InvocationError};

/// Resolver plus the process facility the actions launch through.
pub struct Engine<P, S> {
    resolver: Resolver<S>,
    process: P,
}

impl<P: ProcessAdapter, S: ShellLister> Engine<P, S> {
    pub fn new(process: P, shell: S) -> Self {
        Self {
            resolver: Resolver::new(shell),
            process,
        }
    }

    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.resolver = self.resolver.with_search_path(search_path);
        self
    }

    pub fn resolver(&self) -> &Resolver<S> {
        &self.resolver
    }

    /// See [`Resolver::resolve`].
    pub fn resolve<'a>(&'a mut self, text: &'a str, settings: Settings) -> Candidates<'a, S> {
        self.resolver.resolve(text, settings)
    }

    /// Run `target` with no input; stdout is posted as a result.
    ///
    /// Killed after the run-and-capture timeout.
    pub fn run_and_capture<L: LateSink>(&self, target: &Target, sink: &L) -> SpawnHandle {
        let invocation = invocation::run(target);
        self.dispatch(ActionKind::RunAndCapture, invocation, target, sink)
    }

    /// Start `target` with no input and no time limit. Only errors are posted.
    pub fn execute<L: LateSink>(&self, target: &Target, sink: &L) -> SpawnHandle {
        self.dispatch(ActionKind::Execute, invocation::run(target), target, sink)
    }

    /// Launch every target once with all of `items` appended as arguments.
    ///
    /// Only errors are posted.
    pub fn pass_to_commands<L: LateSink>(
        &self,
        items: &[Item],
        targets: &[Target],
        sink: &L,
    ) -> Vec<SpawnHandle> {
        each(targets, |target| {
            let invocation = invocation::pass_as_argument(target, items);
            self.dispatch(ActionKind::PassToCommand, invocation, target, sink)
        })
    }

    /// Feed `text` to `target` on stdin. Only errors are posted.
    pub fn write_to_command<L: LateSink>(
        &self,
        text: &str,
        target: &Target,
        sink: &L,
    ) -> SpawnHandle {
        let invocation = invocation::feed_stdin(target, text);
        self.dispatch(ActionKind::WriteToCommand, invocation, target, sink)
    }

    /// Feed `text` to `target` on stdin and post its stdout as a result.
    pub fn filter_through_command<L: LateSink>(
        &self,
        text: &str,
        target: &Target,
        sink: &L,
    ) -> SpawnHandle {
        let invocation = invocation::feed_stdin(target, text);
        self.dispatch(ActionKind::FilterThroughCommand, invocation, target, sink)
    }

    /// Perform `action` on `items` with each of `targets`.
    ///
    /// Run and execute ignore `items`. Pass launches each target once with
    /// every item. The stdin actions take exactly one text item and launch
    /// each target with it. Nothing is spawned when the items are rejected.
    pub fn perform<L: LateSink>(
        &self,
        action: ActionKind,
        items: &[Item],
        targets: &[Target],
        sink: &L,
    ) -> Result<Vec<SpawnHandle>, InvocationError> {
        invocation::check_items(action, items)?;
        // Checked above: stdin actions carry exactly one text item.
        let text = items.first().and_then(Item::as_text).unwrap_or_default();
        let handles = match action {
            ActionKind::RunAndCapture => each(targets, |t| self.run_and_capture(t, sink)),
            ActionKind::Execute => each(targets, |t| self.execute(t, sink)),
            ActionKind::PassToCommand => self.pass_to_commands(items, targets, sink),
            ActionKind::WriteToCommand => each(targets, |t| self.write_to_command(text, t, sink)),
            ActionKind::FilterThroughCommand => {
                each(targets, |t| self.filter_through_command(text, t, sink))
            }
        };
        Ok(handles)
    }

    fn dispatch<L: LateSink>(
        &self,
        action: ActionKind,
        invocation: Invocation,
        target: &Target,
        sink: &L,
    ) -> SpawnHandle {
        tracing::debug!(
            %action,
            target = %target.log(),
            argv = ?invocation.argv_lossy(),
            "launching"
        );
        let sink = sink.clone();
        let wants = action.wants_stdout_result();
        self.process.spawn(
            invocation,
            action.timeout(),
            Box::new(move |outcome| {
                if let Some(verdict) = classify(&outcome, wants) {
                    deliver(action, verdict, &sink);
                }
            }),
        )
    }
}

fn each(targets: &[Target], launch: impl FnMut(&Target) -> SpawnHandle) -> Vec<SpawnHandle> {
    targets.iter().map(launch).collect()
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
