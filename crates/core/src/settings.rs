// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User toggles for the expensive discovery sources.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value:?} (expected true/false)")]
    InvalidBool { key: String, value: String },
}

/// Discovery toggles. Both default to off.
///
/// Passed by value into each resolution so resolution never reads ambient
/// state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Look up interactive-shell aliases.
    pub include_aliases: bool,
    /// Look up interactive-shell functions.
    pub include_functions: bool,
}

impl Settings {
    pub fn include_aliases(mut self, on: bool) -> Self {
        self.include_aliases = on;
        self
    }

    pub fn include_functions(mut self, on: bool) -> Self {
        self.include_functions = on;
        self
    }

    pub fn from_toml(path: &Path, content: &str) -> Result<Self, SettingsError> {
        let path = path.to_path_buf();
        toml::from_str(content).map_err(|source| SettingsError::Parse { path, source })
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(path, &content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Parse a boolean toggle as written in env vars (`1/true/yes/on`, `0/false/no/off`).
pub fn parse_toggle(key: &str, value: &str) -> Result<bool, SettingsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(SettingsError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
