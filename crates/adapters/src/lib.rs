// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! qr-adapters: Boundaries to processes, the interactive shell, and the
//! caller's late result/error channel

pub mod late;
pub mod process;
pub mod shell;
pub mod subprocess;

pub use late::{ChannelSink, LateEvent, LateSink};
pub use process::{ExitCallback, ProcessAdapter, SpawnHandle, TokioProcessAdapter};
pub use shell::{InteractiveShell, ListingError, ShellLister};

#[cfg(any(test, feature = "test-support"))]
pub use late::FakeLateSink;
#[cfg(any(test, feature = "test-support"))]
pub use process::{FakeProcessAdapter, SpawnCall};
#[cfg(any(test, feature = "test-support"))]
pub use shell::FakeShellLister;
