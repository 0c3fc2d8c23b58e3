// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qr actions` specs

use crate::prelude::*;

#[test]
fn lists_every_action() {
    cli()
        .args(&["actions"])
        .passes()
        .stdout_has("Run (Get Output)")
        .stdout_has("Run this program")
        .stdout_has("Pass to Command...")
        .stdout_has("Write to Command...")
        .stdout_has("Filter through Command...");
}

#[test]
fn json_listing_parses() {
    let run = cli().args(&["actions", "-o", "json"]).passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    let commands: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|action| action["command"].as_str().unwrap())
        .collect();
    assert_eq!(commands, ["run", "exec", "pass", "write", "filter"]);
}
