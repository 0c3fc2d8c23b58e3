// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qr pass` specs

use crate::prelude::*;

/// Script that records its argument count and arguments, one per line.
fn recorder(temp: &Project, name: &str) {
    let body = format!("printf '%s\\n' \"$#\" \"$@\" > \"$PROJECT/{name}.out\"");
    temp.script(name, &body);
}

#[test]
fn item_with_spaces_is_one_argument() {
    let temp = Project::empty();
    recorder(&temp, "rec");

    temp.qr()
        .args(&["pass", "two words", "--to", "rec"])
        .passes()
        .stdout_eq("");
    assert_eq!(temp.read("rec.out"), "1\ntwo words\n");
}

#[test]
fn target_arguments_come_before_item() {
    let temp = Project::empty();
    recorder(&temp, "rec");

    temp.qr().args(&["pass", "item", "--to", "rec -v"]).passes();
    assert_eq!(temp.read("rec.out"), "2\n-v\nitem\n");
}

#[test]
fn all_items_go_to_one_process() {
    let temp = Project::empty();
    temp.script("count", "echo run >> \"$PROJECT/count.out\"");

    temp.qr()
        .args(&["pass", "a", "b", "c", "--to", "count"])
        .passes();
    assert_eq!(temp.read("count.out"), "run\n");
}

#[test]
fn items_keep_their_order() {
    let temp = Project::empty();
    recorder(&temp, "rec");

    temp.qr().args(&["pass", "a", "b", "--to", "rec"]).passes();
    assert_eq!(temp.read("rec.out"), "2\na\nb\n");
}

#[test]
fn every_target_gets_every_item() {
    let temp = Project::empty();
    recorder(&temp, "first");
    recorder(&temp, "second");

    temp.qr()
        .args(&["pass", "x", "y", "--to", "first", "--to", "second"])
        .passes();
    assert_eq!(temp.read("first.out"), "2\nx\ny\n");
    assert_eq!(temp.read("second.out"), "2\nx\ny\n");
}

#[test]
fn existing_file_passed_as_path() {
    let temp = Project::empty();
    recorder(&temp, "rec");
    let file = temp.file("data.txt", "content");

    temp.qr()
        .args(&["pass", file.to_str().unwrap(), "--to", "rec"])
        .passes();
    assert_eq!(temp.read("rec.out"), format!("1\n{}\n", file.display()));
}

#[test]
fn output_is_not_shown() {
    let temp = Project::empty();
    temp.qr()
        .args(&["pass", "hello", "--to", "echo"])
        .passes()
        .stdout_eq("");
}

#[test]
fn errors_are_reported() {
    let temp = Project::empty();
    temp.script("picky", "echo \"rejected $1\" >&2; exit 1");
    temp.qr()
        .args(&["pass", "thing", "--to", "picky"])
        .exits(1)
        .stderr_has("qr: pass: rejected thing");
}
