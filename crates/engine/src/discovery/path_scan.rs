// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! PATH lookup with first-match-wins precedence.

use std::ffi::OsString;
use std::path::PathBuf;

use qr_core::is_runnable_file;

/// Search path used when `PATH` is unset.
pub const DEFAULT_PATH: &str = "/bin:/usr/bin";

/// Where the resolver looks for executables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchPath {
    /// Read `PATH` each time a lookup runs.
    #[default]
    Environment,
    /// A fixed list of directories.
    Dirs(Vec<PathBuf>),
}

impl SearchPath {
    pub fn dirs(&self) -> Vec<PathBuf> {
        match self {
            SearchPath::Environment => split_search_path(std::env::var_os("PATH")),
            SearchPath::Dirs(dirs) => dirs.clone(),
        }
    }
}

/// Split a `PATH`-style value, falling back to [`DEFAULT_PATH`] when unset.
pub fn split_search_path(raw: Option<OsString>) -> Vec<PathBuf> {
    let raw = raw.unwrap_or_else(|| DEFAULT_PATH.into());
    std::env::split_paths(&raw).collect()
}

/// The first `dir/word` that is a readable, executable regular file.
///
/// Directories are tried in order and the scan stops at the first match.
/// An absolute `word` replaces the directory in the join, so `/bin/ls`
/// resolves to itself.
pub fn find_executable(dirs: &[PathBuf], word: &str) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(word))
        .find(|candidate| is_runnable_file(candidate))
}

#[cfg(test)]
#[path = "path_scan_tests.rs"]
mod tests;
