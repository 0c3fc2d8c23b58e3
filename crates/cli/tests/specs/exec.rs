// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qr exec` specs

use crate::prelude::*;

#[test]
fn output_is_not_shown() {
    let temp = Project::empty();
    temp.qr()
        .args(&["exec", "echo hello"])
        .passes()
        .stdout_eq("");
}

#[test]
fn command_runs_to_completion() {
    let temp = Project::empty();
    temp.script("mark", "sleep 0.2; echo done > \"$PROJECT/mark.out\"");

    temp.qr().args(&["exec", "mark"]).passes();
    assert_eq!(temp.read("mark.out"), "done\n");
}

#[test]
fn errors_are_reported() {
    let temp = Project::empty();
    temp.script("broken", "echo \"no display\" >&2; exit 1");
    temp.qr()
        .args(&["exec", "broken"])
        .exits(1)
        .stderr_has("qr: exec: no display");
}

#[test]
fn unknown_command_exits_2() {
    let temp = Project::empty();
    temp.qr()
        .args(&["exec", "no-such-program-here"])
        .exits(2)
        .stderr_has("no command found");
}
