// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qr write` specs

use crate::prelude::*;

#[test]
fn text_arrives_on_stdin() {
    let temp = Project::empty();
    temp.script("keep", "cat > \"$PROJECT/kept\"");

    temp.qr()
        .args(&["write", "hello there", "--to", "keep"])
        .passes()
        .stdout_eq("");
    assert_eq!(temp.read("kept"), "hello there");
}

#[test]
fn text_read_from_own_stdin() {
    let temp = Project::empty();
    temp.script("keep", "cat > \"$PROJECT/kept\"");

    temp.qr()
        .args(&["write", "--to", "keep"])
        .stdin("piped\n")
        .passes();
    assert_eq!(temp.read("kept"), "piped\n");
}

#[test]
fn output_is_discarded() {
    let temp = Project::empty();
    temp.qr()
        .args(&["write", "hello", "--to", "cat"])
        .passes()
        .stdout_eq("");
}

#[test]
fn errors_are_reported() {
    let temp = Project::empty();
    temp.script("reject", "cat >/dev/null; echo nope >&2; exit 1");
    temp.qr()
        .args(&["write", "hello", "--to", "reject"])
        .exits(1)
        .stderr_has("qr: write: nope");
}
