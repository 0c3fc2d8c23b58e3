// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qr filter` specs

use crate::prelude::*;

#[test]
fn output_is_returned() {
    let temp = Project::empty();
    temp.qr()
        .args(&["filter", "hello", "--to", "tr a-z A-Z"])
        .passes()
        .stdout_eq("HELLO\n");
}

#[test]
fn text_read_from_own_stdin() {
    let temp = Project::empty();
    temp.qr()
        .args(&["filter", "--to", "sort"])
        .stdin("b\na\n")
        .passes()
        .stdout_eq("a\nb\n");
}

#[test]
fn filter_script_from_project_path() {
    let temp = Project::empty();
    temp.script("shout", "tr a-z A-Z | sed 's/$/!/'");
    temp.qr()
        .args(&["filter", "hey\n", "--to", "shout"])
        .passes()
        .stdout_eq("HEY!\n");
}

#[test]
fn errors_are_reported() {
    let temp = Project::empty();
    temp.script("reject", "cat >/dev/null; echo bad input >&2; exit 2");
    temp.qr()
        .args(&["filter", "x", "--to", "reject"])
        .exits(1)
        .stdout_eq("")
        .stderr_has("qr: filter: bad input");
}
