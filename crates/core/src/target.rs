// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! What an action runs (targets) and what it operates on (items).

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use nix::unistd::{access, AccessFlags};
use thiserror::Error;

use crate::Candidate;

/// Reasons a file cannot be used as a companion target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("{}: no such file", .path.display())]
    Missing { path: PathBuf },
    #[error("{}: is a directory", .path.display())]
    Directory { path: PathBuf },
    #[error("{}: not a regular file", .path.display())]
    NotAFile { path: PathBuf },
    #[error("{}: not readable and executable", .path.display())]
    NotExecutable { path: PathBuf },
}

/// True when `path` is a regular file the current user may read and execute.
pub fn is_runnable_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file()) && permits_run(path)
}

fn permits_run(path: &Path) -> bool {
    access(path, AccessFlags::R_OK | AccessFlags::X_OK).is_ok()
}

/// A file path that passed the runnable-file check.
///
/// Only [`ExecutablePath::new`] creates one, so holding a value means the
/// check ran (the file may still change on disk afterwards).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutablePath(PathBuf);

impl ExecutablePath {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, TargetError> {
        let path = path.into();
        let meta = match std::fs::metadata(&path) {
            Ok(meta) => meta,
            Err(_) => return Err(TargetError::Missing { path }),
        };
        if meta.is_dir() {
            return Err(TargetError::Directory { path });
        }
        if !meta.is_file() {
            return Err(TargetError::NotAFile { path });
        }
        if !permits_run(&path) {
            return Err(TargetError::NotExecutable { path });
        }
        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ExecutablePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// The program an action runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Something the resolver produced from typed text.
    Command(Candidate),
    /// An executable file picked directly.
    Executable(ExecutablePath),
}

impl Target {
    /// Validate `path` and wrap it as an executable target.
    pub fn file(path: impl Into<PathBuf>) -> Result<Self, TargetError> {
        ExecutablePath::new(path).map(Target::Executable)
    }

    pub fn log(&self) -> String {
        match self {
            Target::Command(c) => format!("command={}", c.text()),
            Target::Executable(p) => format!("executable={}", p.as_path().display()),
        }
    }
}

impl From<Candidate> for Target {
    fn from(candidate: Candidate) -> Self {
        Target::Command(candidate)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Command(c) => write!(f, "{}", c),
            Target::Executable(p) => write!(f, "{}", p.as_path().display()),
        }
    }
}

/// The object an action operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Text(String),
    File(PathBuf),
}

impl Item {
    pub fn text(text: impl Into<String>) -> Self {
        Item::Text(text.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Item::File(path.into())
    }

    /// The value appended to argv when the item is passed as a parameter.
    pub fn as_argument(&self) -> OsString {
        match self {
            Item::Text(text) => OsString::from(text),
            Item::File(path) => path.clone().into_os_string(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Item::Text(text) => Some(text),
            Item::File(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Item::Text(_))
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
