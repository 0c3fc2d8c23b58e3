// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qr resolve` specs

use crate::prelude::*;

#[test]
fn finds_program_on_path() {
    let temp = Project::empty();
    let exe = temp.script("greet", "echo hi");

    temp.qr()
        .args(&["resolve", "greet world"])
        .passes()
        .stdout_has("greet world")
        .stdout_has(&format!("{} world", exe.display()));
}

#[test]
fn json_output_describes_candidate() {
    let temp = Project::empty();
    let exe = temp.script("greet", "echo hi");

    let run = temp.qr()
        .args(&["resolve", "greet", "--output", "json"])
        .passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(value[0]["kind"], "executable");
    assert_eq!(value[0]["label"], "greet");
    assert_eq!(value[0]["path"], exe.display().to_string());
    assert_eq!(value[0]["icon_name"], "exec");
    assert_eq!(value[0]["source"], "Shell Commands");
    assert_eq!(value[0]["rank"], 80);
}

#[test]
fn unknown_word_resolves_to_nothing() {
    let temp = Project::empty();
    temp.qr()
        .args(&["resolve", "no-such-program-here"])
        .passes()
        .stdout_eq("");
}

#[test]
fn multiline_text_is_not_a_command() {
    let temp = Project::empty();
    temp.script("greet", "echo hi");
    temp.qr()
        .args(&["resolve", "greet\ngreet"])
        .passes()
        .stdout_eq("");
}

#[test]
fn text_read_from_stdin() {
    let temp = Project::empty();
    temp.script("greet", "echo hi");
    temp.qr()
        .args(&["resolve"])
        .stdin("greet\n")
        .passes()
        .stdout_has("greet");
}

#[test]
fn aliases_ignored_unless_enabled() {
    let temp = Project::empty();
    temp.file(".bashrc", "alias hey='echo hey-from-alias'\n");

    temp.qr().args(&["resolve", "hey"]).passes().stdout_eq("");
    temp.qr()
        .args(&["--aliases", "resolve", "hey", "-o", "json"])
        .passes()
        .stdout_has("shell_alias")
        .stdout_has("expand_aliases; hey");
}

#[test]
fn aliases_enabled_by_settings_file() {
    let temp = Project::empty();
    temp.file(".bashrc", "alias hey='echo hey-from-alias'\n");
    temp.file("settings.toml", "include_aliases = true\n");

    temp.qr()
        .args(&["resolve", "hey", "-o", "json"])
        .passes()
        .stdout_has("shell_alias");
}

#[test]
fn malformed_settings_file_fails() {
    let temp = Project::empty();
    temp.file("settings.toml", "include_aliases = [\n");

    temp.qr()
        .args(&["resolve", "ls"])
        .exits(1)
        .stderr_has("invalid settings");
}
