// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-blocking process facility: spawn now, get called back on exit.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use qr_core::{ExecOutcome, Invocation};
use tokio::task::JoinHandle;

use crate::subprocess::run_invocation;

/// Called exactly once with the outcome of a spawn.
pub type ExitCallback = Box<dyn FnOnce(ExecOutcome) + Send + 'static>;

/// Handle to one spawn. Dropping it does not cancel the process.
#[derive(Debug)]
pub struct SpawnHandle {
    id: u64,
    task: Option<JoinHandle<()>>,
}

impl SpawnHandle {
    pub fn new(id: u64, task: JoinHandle<()>) -> Self {
        Self {
            id,
            task: Some(task),
        }
    }

    /// A handle with nothing to wait on (completion is driven elsewhere).
    #[cfg(any(test, feature = "test-support"))]
    pub fn detached(id: u64) -> Self {
        Self { id, task: None }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Wait until the process has exited and its callback has returned.
    pub async fn finished(self) {
        if let Some(task) = self.task {
            if let Err(e) = task.await {
                tracing::warn!(id = self.id, error = %e, "spawn task did not complete");
            }
        }
    }
}

/// Adapter for launching processes without blocking the caller.
pub trait ProcessAdapter: Clone + Send + Sync + 'static {
    /// Start `invocation` and return immediately.
    ///
    /// `on_exit` runs once when the process ends for any reason, including
    /// timeout and failure to start.
    fn spawn(
        &self,
        invocation: Invocation,
        timeout: Option<Duration>,
        on_exit: ExitCallback,
    ) -> SpawnHandle;
}

/// Process adapter backed by `tokio::process`.
///
/// Must be used from within a tokio runtime.
#[derive(Clone, Debug, Default)]
pub struct TokioProcessAdapter {
    next_id: Arc<AtomicU64>,
}

impl TokioProcessAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProcessAdapter for TokioProcessAdapter {
    fn spawn(
        &self,
        invocation: Invocation,
        timeout: Option<Duration>,
        on_exit: ExitCallback,
    ) -> SpawnHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let task = tokio::spawn(async move {
            let outcome = run_invocation(invocation, timeout).await;
            tracing::debug!(id, status = %outcome.status, "process exited");
            on_exit(outcome);
        });
        SpawnHandle::new(id, task)
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ExitCallback, ProcessAdapter, SpawnHandle};
    use parking_lot::Mutex;
    use qr_core::{ExecOutcome, Invocation};
    use std::sync::Arc;
    use std::time::Duration;

    /// Recorded spawn request
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpawnCall {
        pub id: u64,
        pub invocation: Invocation,
        pub timeout: Option<Duration>,
    }

    #[derive(Default)]
    struct FakeProcessState {
        calls: Vec<SpawnCall>,
        pending: Vec<(u64, ExitCallback)>,
        next_id: u64,
    }

    /// Fake process adapter for testing.
    ///
    /// Records every spawn and holds its callback until the test completes
    /// it, so completions can be delivered in any order.
    #[derive(Clone, Default)]
    pub struct FakeProcessAdapter {
        inner: Arc<Mutex<FakeProcessState>>,
    }

    impl FakeProcessAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded spawns
        pub fn calls(&self) -> Vec<SpawnCall> {
            self.inner.lock().calls.clone()
        }

        /// Number of spawns whose callback has not run yet
        pub fn pending(&self) -> usize {
            self.inner.lock().pending.len()
        }

        /// Deliver `outcome` to the spawn with `id`. Returns false if that
        /// spawn is unknown or already completed.
        pub fn complete(&self, id: u64, outcome: ExecOutcome) -> bool {
            let callback = {
                let mut state = self.inner.lock();
                let Some(pos) = state.pending.iter().position(|(pid, _)| *pid == id) else {
                    return false;
                };
                state.pending.remove(pos).1
            };
            // Run outside the lock; callbacks may spawn again.
            callback(outcome);
            true
        }

        /// Deliver a clone of `outcome` to every pending spawn, oldest first.
        pub fn complete_all(&self, outcome: ExecOutcome) -> usize {
            let callbacks = std::mem::take(&mut self.inner.lock().pending);
            let n = callbacks.len();
            for (_, callback) in callbacks {
                callback(outcome.clone());
            }
            n
        }
    }

    impl ProcessAdapter for FakeProcessAdapter {
        fn spawn(
            &self,
            invocation: Invocation,
            timeout: Option<Duration>,
            on_exit: ExitCallback,
        ) -> SpawnHandle {
            let mut state = self.inner.lock();
            let id = state.next_id;
            state.next_id += 1;
            state.calls.push(SpawnCall {
                id,
                invocation,
                timeout,
            });
            state.pending.push((id, on_exit));
            SpawnHandle::detached(id)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessAdapter, SpawnCall};

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
