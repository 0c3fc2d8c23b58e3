// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qr actions`: what each action does.

use anyhow::Result;
use qr_core::ActionKind;

use crate::output::{self, OutputFormat};

pub fn handle(format: OutputFormat) -> Result<()> {
    output::print_actions(&ActionKind::ALL, format, &mut std::io::stdout())
}
