// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help output specs

use crate::prelude::*;

#[test]
fn qr_help_lists_actions() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("Run command-line programs")
        .stdout_has("resolve")
        .stdout_has("actions")
        .stdout_has("run")
        .stdout_has("exec")
        .stdout_has("pass")
        .stdout_has("write")
        .stdout_has("filter");
}

#[test]
fn qr_pass_help_shows_to_flag() {
    cli().args(&["pass", "--help"]).passes().stdout_has("--to");
}

#[test]
fn qr_without_subcommand_fails() {
    cli().fails().stderr_has("Usage:");
}
