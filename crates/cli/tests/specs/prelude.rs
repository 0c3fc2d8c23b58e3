// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: a throwaway project directory and fluent output checks.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Output;

/// `qr` with no project: default PATH, no settings file.
pub fn cli() -> Cli {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_qr"));
    cmd.env_remove("QR_INCLUDE_ALIASES")
        .env_remove("QR_INCLUDE_FUNCTIONS");
    Cli { cmd }
}

/// A temp directory with its own `bin/` on PATH, settings file, and HOME.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn bin(&self) -> PathBuf {
        self.path().join("bin")
    }

    /// Write a file relative to the project root.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write an executable shell script into `bin/`.
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.file(&format!("bin/{name}"), &format!("#!/bin/sh\n{body}\n"));
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel)).unwrap()
    }

    pub fn qr(&self) -> Cli {
        let mut cli = cli();
        let path = format!("{}:/bin:/usr/bin", self.bin().display());
        cli.cmd
            .current_dir(self.path())
            .env("PATH", path)
            .env("HOME", self.path())
            .env("QR_CONFIG", self.path().join("settings.toml"))
            .env("PROJECT", self.path());
        cli
    }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    fn output(mut self) -> Output {
        self.cmd.output().unwrap()
    }

    /// Run and require exit code 0.
    pub fn passes(self) -> Run {
        self.exits(0)
    }

    /// Run and require a non-zero exit code.
    pub fn fails(self) -> Run {
        let run = Run(self.output());
        let details = run.describe();
        assert!(!run.0.status.success(), "expected failure\n{details}");
        run
    }

    pub fn exits(self, code: i32) -> Run {
        let run = Run(self.output());
        let (actual, details) = (run.0.status.code(), run.describe());
        assert_eq!(actual, Some(code), "unexpected exit code\n{details}");
        run
    }
}

pub struct Run(Output);

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.stderr).into_owned()
    }

    fn describe(&self) -> String {
        format!("stdout:\n{}\nstderr:\n{}", self.stdout(), self.stderr())
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let (found, details) = (self.stdout().contains(needle), self.describe());
        assert!(found, "stdout missing {needle:?}\n{details}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let (found, details) = (self.stdout().contains(needle), self.describe());
        assert!(!found, "stdout has {needle:?}\n{details}");
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected, "\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let (found, details) = (self.stderr().contains(needle), self.describe());
        assert!(found, "stderr missing {needle:?}\n{details}");
        self
    }
}
