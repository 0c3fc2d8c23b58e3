// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! qr-engine: Command discovery and asynchronous command actions

pub mod actions;
pub mod classify;
pub mod discovery;
pub mod invocation;

pub use actions::Engine;
pub use classify::{classify, Verdict, MAX_ERROR_CHARS};
pub use discovery::{
    Candidates, Resolver, SearchPath, SOURCE_DESCRIPTION, SOURCE_NAME, TEXT_SOURCE_RANK,
};

pub use invocation::InvocationError;
