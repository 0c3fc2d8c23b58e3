// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-engine alias/function name sets, fetched once on first demand.

use std::collections::HashSet;

use qr_adapters::{ListingError, ShellLister};

use super::listing::{parse_alias_names, parse_function_names};

/// One set of names plus whether it has been fetched.
///
/// An empty set that has been fetched stays empty: `warm` is the only
/// signal, never the contents.
#[derive(Debug, Default)]
pub struct NameCache {
    names: HashSet<String>,
    warm: bool,
}

impl NameCache {
    pub fn is_warm(&self) -> bool {
        self.warm
    }

    /// Populate from `fetch` unless already warm.
    pub fn ensure_warm(&mut self, fetch: impl FnOnce() -> HashSet<String>) {
        if self.is_warm() {
            return;
        }
        self.names = fetch();
        self.warm = true;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Alias and function names known to the interactive shell.
#[derive(Debug, Default)]
pub struct DiscoveryCache {
    aliases: NameCache,
    functions: NameCache,
}

impl DiscoveryCache {
    /// Whether `word` is an alias, warming the alias set first if needed.
    pub fn is_alias<S: ShellLister + ?Sized>(&mut self, shell: &S, word: &str) -> bool {
        let fetch_aliases = || fetch("alias", shell.list_aliases(), parse_alias_names);
        self.aliases.ensure_warm(fetch_aliases);
        self.aliases.contains(word)
    }

    /// Whether `word` is a function, warming the function set first if needed.
    pub fn is_function<S: ShellLister + ?Sized>(&mut self, shell: &S, word: &str) -> bool {
        let fetch_functions = || fetch("function", shell.list_functions(), parse_function_names);
        self.functions.ensure_warm(fetch_functions);
        self.functions.contains(word)
    }
}

/// A failed listing counts as "none found" and is not retried.
fn fetch(
    kind: &'static str,
    listing: Result<String, ListingError>,
    parse: fn(&str) -> HashSet<String>,
) -> HashSet<String> {
    match listing {
        Ok(listing) => {
            let names = parse(&listing);
            tracing::debug!(kind, count = names.len(), "discovery cache warmed");
            names
        }
        Err(e) => {
            tracing::warn!(kind, error = %e, "shell listing failed, no names cached"
);
            HashSet::new()
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
