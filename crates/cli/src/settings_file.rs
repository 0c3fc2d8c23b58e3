// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Layered settings: TOML file, then env overrides, then command-line flags.

use std::path::PathBuf;

use qr_core::{parse_toggle, Settings, SettingsError};

use crate::env;

/// Where settings come from. Nothing is cached; every [`current`] call
/// re-reads the file and the environment.
///
/// [`current`]: SettingsFile::current
#[derive(Debug, Clone, Default)]
pub struct SettingsFile {
    path: Option<PathBuf>,
    force_aliases: bool,
    force_functions: bool,
}

impl SettingsFile {
    /// Settings file at the path the environment selects.
    pub fn from_env() -> Self {
        match env::config_path() {
            Some(path) => Self::at(path),
            None => Self::default(),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Turn discovery sources on regardless of file and env.
    pub fn force(mut self, aliases: bool, functions: bool) -> Self {
        self.force_aliases = aliases;
        self.force_functions = functions;
        self
    }

    /// Settings as of now.
    pub fn current(&self) -> Result<Settings, SettingsError> {
        let mut settings = match &self.path {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(value) = env::include_aliases() {
            let on = parse_toggle(env::INCLUDE_ALIASES_VAR, &value)?;
            settings = settings.include_aliases(on);
        }
        if let Some(value) = env::include_functions() {
            let on = parse_toggle(env::INCLUDE_FUNCTIONS_VAR, &value)?;
            settings = settings.include_functions(on);
        }
        if self.force_aliases {
            settings = settings.include_aliases(true);
        }
        if self.force_functions {
            settings = settings.include_functions(true);
        }
        tracing::debug!(
            path = ?self.path,
            include_aliases = settings.include_aliases,
            include_functions = settings.include_functions,
            "settings loaded"
        );
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "settings_file_tests.rs"]
mod tests;
