// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turning free-form text into runnable candidates.

mod cache;
mod listing;
mod path_scan;

pub use path_scan::{SearchPath, DEFAULT_PATH};

use std::iter::FusedIterator;

use qr_adapters::ShellLister;
use qr_core::{Candidate, Settings};

use cache::DiscoveryCache;
use path_scan::find_executable;

/// Relevance rank reported to whatever ranks text interpretations.
pub const TEXT_SOURCE_RANK: i32 = 80;

/// Name under which resolved commands are listed.
pub const SOURCE_NAME: &str = "Shell Commands";
pub const SOURCE_DESCRIPTION: &str = "Run command-line programs";

/// Command resolver owning the alias/function cache.
pub struct Resolver<S> {
    shell: S,
    cache: DiscoveryCache,
    search_path: SearchPath,
}

impl<S: ShellLister> Resolver<S> {
    pub fn new(shell: S) -> Self {
        Self {
            shell,
            cache: DiscoveryCache::default(),
            search_path: SearchPath::default(),
        }
    }

    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    pub fn rank(&self) -> i32 {
        TEXT_SOURCE_RANK
    }

    /// Candidates for `text`, produced lazily in precedence order:
    /// alias, function, then the first PATH match.
    ///
    /// Each source is only consulted when the iterator reaches it, so
    /// taking the first candidate never scans PATH if an alias matched.
    pub fn resolve<'a>(&'a mut self, text: &'a str, settings: Settings) -> Candidates<'a, S> {
        let (first_word, stage) = match command_word(text) {
            Some(word) => (word, Stage::Aliases),
            None => ("", Stage::Done),
        };
        Candidates {
            resolver: self,
            text,
            first_word,
            settings,
            stage,
        }
    }
}

/// The word to look up, or `None` if `text` cannot be a command here.
fn command_word(text: &str) -> Option<&str> {
    if text.contains(['\n', '\r']) {
        return None;
    }
    let mut words = text.split_whitespace();
    let first = words.next()?;
    // A lone absolute path is a file, handled by file discovery.
    if first.starts_with('/') && words.next().is_none() {
        return None;
    }
    Some(first)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Aliases,
    Functions,
    Path,
    Done,
}

/// Lazy, single-pass sequence of candidates for one text.
pub struct Candidates<'a, S> {
    resolver: &'a mut Resolver<S>,
    text: &'a str,
    first_word: &'a str,
    settings: Settings,
    stage: Stage,
}

impl<S: ShellLister> Iterator for Candidates<'_, S> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        loop {
            match self.stage {
                Stage::Aliases => {
                    self.stage = Stage::Functions;
                    if self.settings.include_aliases {
                        let resolver = &mut *self.resolver;
                        if resolver.cache.is_alias(&resolver.shell, self.first_word) {
                            return Some(Candidate::shell_alias(self.text));
                        }
                    }
                }
                Stage::Functions => {
                    self.stage = Stage::Path;
                    if self.settings.include_functions {
                        let resolver = &mut *self.resolver;
                        if resolver.cache.is_function(&resolver.shell, self.first_word) {
                            return Some(Candidate::shell_alias(self.text));
                        }
                    }
                }
                Stage::Path => {
                    self.stage = Stage::Done;
                    let dirs = self.resolver.search_path.dirs();
                    if let Some(path) = find_executable(&dirs, self.first_word) {
                        return Some(Candidate::executable(path, self.text));
                    }
                }
                Stage::Done => return None,
            }
        }
    }
}

impl<S: ShellLister> FusedIterator for Candidates<'_, S> {}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
