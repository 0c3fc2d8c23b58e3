// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument vectors and stdin payloads for each action.

use std::ffi::OsString;

use qr_core::{ActionKind, Invocation, Item, Target, RUN_SHELL};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("{action} does not accept {item}")]
    UnacceptedItem {
        action: ActionKind,
        item: String,
    },
    #[error("{action} takes exactly one item, got {count}")]
    ItemCount { action: ActionKind, count: usize },
}

/// `sh -c <line>` followed by `extra`.
fn shell_line(line: String, extra: &[&str]) -> Vec<OsString> {
    let mut argv = vec![
        OsString::from(RUN_SHELL),
        OsString::from("-c"),
        OsString::from(line),
    ];

    argv.extend(extra.iter().map(OsString::from));
    argv
}

/// Run the target as-is.
pub fn run(target: &Target) -> Invocation {
    match target {
        Target::Command(c) => {
            let line = c.command_line().to_string();
            Invocation::new(shell_line(line, &["--"]))
        }
        Target::Executable(path) => Invocation::new([path.as_path()]),
    }
}

/// Run the target with each item appended as one positional argument.
///
/// For commands the line is followed by `"$@"`, so items with spaces still
/// arrive as single arguments. The `--` fills `$0`.
pub fn pass_as_argument(target: &Target, items: &[Item]) -> Invocation {
    let mut argv = match target {
        Target::Command(c) => {
            let line = format!("{} \"$@\"", c.command_line());
            shell_line(line, &["--"])
        }
        Target::Executable(path) => vec![path.as_path().as_os_str().to_os_string()],
    };
    argv.extend(items.iter().map(Item::as_argument));
    Invocation::new(argv)
}

/// Run the target with `text` on stdin; no positional arguments.
pub fn feed_stdin(target: &Target, text: &str) -> Invocation {
    let invocation = match target {
        Target::Command(c) => Invocation::new(shell_line(c.command_line().to_string(), &[])),
        Target::Executable(path) => Invocation::new([path.as_path()]),
    };
    invocation.with_stdin(text.as_bytes())
}

/// Reject items `action` cannot operate on.
///
/// Run and execute ignore items. The stdin actions need exactly one text
/// item; pass takes any number of text or file items.
pub fn check_items(action: ActionKind, items: &[Item]) -> Result<(), InvocationError> {
    if action.feeds_stdin() && items.len() != 1 {
        return Err(InvocationError::ItemCount {
            action,
            count: items.len(),
        });
    }
    if !action.requires_target() {
        return Ok(());
    }
    match items.iter().find(|item| !action.accepts(item)) {
        Some(item) => Err(InvocationError::UnacceptedItem {
            action,
            item: describe(item),
        }),
        None => Ok(()),
    }
}

fn describe(item: &Item) -> String {
    match item {
        Item::Text(_) => "text".to_string(),
        Item::File(path) => format!("file {}", path.display()),
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
