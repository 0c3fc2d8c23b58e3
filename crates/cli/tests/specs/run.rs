// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qr run` specs

use crate::prelude::*;

#[test]
fn prints_program_output() {
    let temp = Project::empty();
    temp.qr()
        .args(&["run", "echo hello"])
        .passes()
        .stdout_eq("hello\n");
}

#[test]
fn runs_script_from_project_path() {
    let temp = Project::empty();
    temp.script("greet", "echo \"hello-$1\"");
    temp.qr()
        .args(&["run", "greet world"])
        .passes()
        .stdout_eq("hello-world\n");
}

#[test]
fn runs_executable_file_by_path() {
    let temp = Project::empty();
    let exe = temp.script("tool", "echo from-file");
    temp.qr()
        .args(&["run", exe.to_str().unwrap()])
        .passes()
        .stdout_eq("from-file\n");
}

#[test]
fn non_executable_file_is_rejected() {
    let temp = Project::empty();
    let file = temp.file("notes.txt", "text");
    temp.qr()
        .args(&["run", file.to_str().unwrap()])
        .exits(2)
        .stderr_has("not readable and executable");
}

#[test]
fn stderr_only_failure_is_reported() {
    let temp = Project::empty();
    temp.script("broken", "echo oops >&2; exit 3");
    temp.qr()
        .args(&["run", "broken"])
        .exits(1)
        .stdout_eq("")
        .stderr_has("qr: run: oops");
}

#[test]
fn failure_with_output_still_shows_output() {
    let temp = Project::empty();
    temp.script("partial", "echo partial; echo warn >&2; exit 1");
    temp.qr()
        .args(&["run", "partial"])
        .passes()
        .stdout_eq("partial\n");
}

#[test]
fn unknown_command_exits_2() {
    let temp = Project::empty();
    temp.qr()
        .args(&["run", "no-such-program-here"])
        .exits(2)
        .stderr_has("no command found");
}

#[test]
fn alias_runs_through_interactive_shell() {
    let temp = Project::empty();
    temp.file(".bashrc", "alias hey='echo hey-from-alias'\n");
    temp.qr()
        .args(&["--aliases", "run", "hey"])
        .passes()
        .stdout_has("hey-from-alias");
}
