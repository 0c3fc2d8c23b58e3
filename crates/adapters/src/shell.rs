// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ask the user's interactive shell for alias and function listings.

use std::path::PathBuf;
use std::process::Stdio;

use qr_core::{ExitStatus, EXPAND_ALIASES, INTERACTIVE_SHELL};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("`{builtin}` listing failed ({status})")]
    Failed {
        builtin: &'static str,
        status: ExitStatus,
    },
}

/// Source of raw alias/function listings.
///
/// Called at most once per category per engine, the first time discovery
/// needs it. Blocking.
pub trait ShellLister: Send + Sync {
    /// Raw output of the `alias` builtin.
    fn list_aliases(&self) -> Result<String, ListingError>;

    /// Raw output of `declare -F`.
    fn list_functions(&self) -> Result<String, ListingError>;
}

/// Runs `bash -i -c "shopt -s expand_aliases; <builtin>"` so the user's rc
/// files are loaded.
#[derive(Debug, Clone)]
pub struct InteractiveShell {
    program: PathBuf,
}

impl InteractiveShell {
    pub fn new() -> Self {
        Self::with_program(INTERACTIVE_SHELL)
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn listing(&self, builtin: &'static str) -> Result<String, ListingError> {
        let script = format!("{EXPAND_ALIASES} {builtin}");
        tracing::debug!(
            program = %self.program.display(),
            %script,
            "listing interactive shell builtins"
        );
        // stdin closed so an interactive shell cannot wait on the terminal;
        // rc-file chatter on stderr is dropped.
        let output = std::process::Command::new(&self.program)
            .args(["-i", "-c", &script])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| ListingError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;
        if !output.status.success() {
            return Err(ListingError::Failed {
                builtin,
                status: output.status.into(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for InteractiveShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellLister for InteractiveShell {
    fn list_aliases(&self) -> Result<String, ListingError> {
        self.listing("alias")
    }

    fn list_functions(&self) -> Result<String, ListingError> {
        self.listing("declare -F")
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ListingError, ShellLister};
    use parking_lot::Mutex;
    use qr_core::ExitStatus;
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeShellState {
        aliases: Option<String>,
        functions: Option<String>,
        alias_calls: usize,
        function_calls: usize,
    }

    /// Fake shell lister with canned listings and call counters.
    ///
    /// A listing left unset fails like a shell that exited non-zero.
    #[derive(Clone, Default)]
    pub struct FakeShellLister {
        inner: Arc<Mutex<FakeShellState>>,
    }

    impl FakeShellLister {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_aliases(self, listing: impl Into<String>) -> Self {
            self.inner.lock().aliases = Some(listing.into());
            self
        }

        pub fn with_functions(self, listing: impl Into<String>) -> Self {
            self.inner.lock().functions = Some(listing.into());
            self
        }

        pub fn alias_calls(&self) -> usize {
            self.inner.lock().alias_calls
        }

        pub fn function_calls(&self) -> usize {
            self.inner.lock().function_calls
        }
    }

    fn failed(builtin: &'static str) -> ListingError {
        ListingError::Failed {
            builtin,
            status: ExitStatus::Exited(1),
        }
    }

    impl ShellLister for FakeShellLister {
        fn list_aliases(&self) -> Result<String, ListingError> {
            let mut state = self.inner.lock();
            state.alias_calls += 1;
            state.aliases.clone().ok_or_else(|| failed("alias"))
        }

        fn list_functions(&self) -> Result<String, ListingError> {
            let mut state = self.inner.lock();
            state.function_calls += 1;
            state.functions.clone().ok_or_else(|| failed("declare -F"))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeShellLister;

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
