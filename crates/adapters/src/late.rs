// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The caller's deferred result/error channel.

use qr_core::{ActionKind, OperationError};
use tokio::sync::mpsc;

/// Receives outcomes of operations after their processes finish.
pub trait LateSink: Clone + Send + Sync + 'static {
    /// Post text produced by `action`.
    fn register_late_result(&self, action: ActionKind, text: String);

    /// Post a failure of `action`.
    fn register_late_error(&self, action: ActionKind, error: OperationError);
}

/// A late delivery, as seen by whoever drains a [`ChannelSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LateEvent {
    Result { action: ActionKind, text: String },
    Error {
        action: ActionKind,
        error: OperationError,
    },
}

/// Late sink that forwards into an unbounded channel.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<LateEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<LateEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn post(&self, event: LateEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("late event dropped, receiver closed");
        }
    }
}

impl LateSink for ChannelSink {
    fn register_late_result(&self, action: ActionKind, text: String) {
        tracing::debug!(%action, bytes = text.len(), "late result");
        self.post(LateEvent::Result { action, text });
    }

    fn register_late_error(&self, action: ActionKind, error: OperationError) {
        tracing::debug!(%action, %error, "late error");
        self.post(LateEvent::Error { action, error });
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{LateEvent, LateSink};
    use parking_lot::Mutex;
    use qr_core::{ActionKind, OperationError};
    use std::sync::Arc;

    /// Fake late sink for testing
    #[derive(Clone, Default)]
    pub struct FakeLateSink {
        inner: Arc<Mutex<Vec<LateEvent>>>,
    }

    impl FakeLateSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded deliveries
        pub fn events(&self) -> Vec<LateEvent> {
            self.inner.lock().clone()
        }

        pub fn results(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    LateEvent::Result { text, .. } => Some(text),
                    LateEvent::Error { .. } => None,
                })
                .collect()
        }

        pub fn errors(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    LateEvent::Error { error, .. } => Some(error.message().to_string()),
                    LateEvent::Result { .. } => None,
                })
                .collect()
        }
    }

    impl LateSink for FakeLateSink {
        fn register_late_result(&self, action: ActionKind, text: String) {
            self.inner.lock().push(LateEvent::Result { action, text });
        }

        fn register_late_error(&self, action: ActionKind, error: OperationError) {
            self.inner.lock().push(LateEvent::Error { action, error });
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeLateSink;

#[cfg(test)]
#[path = "late_tests.rs"]
mod tests;
