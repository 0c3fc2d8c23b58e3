// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

pub const CONFIG_VAR: &str = "QR_CONFIG";
pub const INCLUDE_ALIASES_VAR: &str = "QR_INCLUDE_ALIASES";
pub const INCLUDE_FUNCTIONS_VAR: &str = "QR_INCLUDE_FUNCTIONS";
pub const LOG_VAR: &str = "QR_LOG";

/// Filter used when `QR_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolve settings file: QR_CONFIG > <config dir>/quickrun/settings.toml
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("quickrun").join("settings.toml"))
}

/// Raw `QR_INCLUDE_ALIASES`, if set.
pub fn include_aliases() -> Option<String> {
    std::env::var(INCLUDE_ALIASES_VAR).ok()
}

/// Raw `QR_INCLUDE_FUNCTIONS`, if set.
pub fn include_functions() -> Option<String> {
    std::env::var(INCLUDE_FUNCTIONS_VAR).ok()
}

/// Log filter directives (default `warn`).
pub fn log_filter() -> String {
    std::env::var(LOG_VAR)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
