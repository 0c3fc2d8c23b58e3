// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsers for the shell's `alias` and `declare -F` listings.

use std::collections::HashSet;

const ALIAS_PREFIX: &str = "alias ";

/// Boundary between two entries of the `alias` listing: the closing quote of
/// one value, a newline, and the next `alias ` keyword.
const ALIAS_SEPARATOR: &str = "'\nalias ";

/// Alias names from the output of the `alias` builtin.
///
/// ```text
/// alias gst='git status'
/// alias ll='ls -l'
/// ```
pub fn parse_alias_names(listing: &str) -> HashSet<String> {
    let Some(body) = listing.trim_start().strip_prefix(ALIAS_PREFIX) else {
        return HashSet::new();
    };
    split_alias_entries(body)
        .into_iter()
        .filter_map(alias_name)
        .collect()
}

/// Split on separators whose quote is not backslash-escaped.
fn split_alias_entries(body: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut start = 0;
    let mut from = 0;
    while let Some(found) = body[from..].find(ALIAS_SEPARATOR) {
        let at = from + found;
        if body[..at].ends_with('\\') {
            from = at + 1;
            continue;
        }
        entries.push(&body[start..at]);
        start = at + ALIAS_SEPARATOR.len();
        from = start;
    }
    entries.push(&body[start..]);
    entries
}

fn alias_name(entry: &str) -> Option<String> {
    let (name, _) = entry.split_once('=')?;
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Function names from `declare -F` output: the last word of each line.
///
/// ```text
/// declare -f mkcd
/// declare -fx nvm
/// ```
pub fn parse_function_names(listing: &str) -> HashSet<String> {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
