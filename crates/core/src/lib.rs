// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! qr-core: Data model for the quickrun command engine

pub mod action;
pub mod candidate;
pub mod error;
pub mod invocation;
pub mod outcome;
pub mod settings;
pub mod target;

pub use action::{ActionKind, RUN_AND_CAPTURE_TIMEOUT};
pub use candidate::{Candidate, EXPAND_ALIASES, FALLBACK_ICON, INTERACTIVE_SHELL, RUN_SHELL};
pub use error::OperationError;
pub use invocation::Invocation;
pub use outcome::{format_duration, ExecOutcome, ExitStatus};
pub use settings::{parse_toggle, Settings, SettingsError};
pub use target::{is_runnable_file, ExecutablePath, Item, Target, TargetError};
