// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run one invocation to completion, with optional stdin and timeout.

use std::process::Stdio;
use std::time::{Duration, Instant};

use qr_core::{ExecOutcome, ExitStatus, Invocation};
use tokio::io::AsyncWriteExt;

/// Spawn `invocation`, feed its stdin, and wait for it to finish.
///
/// Always produces an outcome: spawn errors become `FailedToStart` with the
/// error text on stderr, and an overrun kills the process and reports
/// `TimedOut` with empty streams.
pub async fn run_invocation(invocation: Invocation, timeout: Option<Duration>) -> ExecOutcome {
    let Invocation { argv, stdin } = invocation;
    let Some((program, args)) = argv.split_first() else {
        return failed_to_start("empty argument vector".to_string());
    };
    let program_name = program.to_string_lossy().into_owned();

    let span = tracing::info_span!(
        "qr.process",
        program = %program_name,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );
    let start = Instant::now();
    let stdin_cfg = match stdin {
        Some(_) => Stdio::piped(),
        None => Stdio::null(),
    };
    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args)
        .stdin(stdin_cfg)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!(parent: &span, error = %e, "spawn failed");
            return failed_to_start(format!("failed to start `{}`: {}", program_name, e));
        }
    };

    // Feed stdin from its own task so a program that writes a lot before
    // reading cannot deadlock against us.
    let writer = match (stdin, child.stdin.take()) {
        (Some(data), Some(mut pipe)) => Some(tokio::spawn(async move {
            if let Err(e) = pipe.write_all(&data).await {
                // EPIPE here only means the program exited without reading.
                tracing::debug!(error = %e, "stdin write stopped early");
            }
            // pipe dropped here: EOF
        })),
        _ => None,
    };

    let wait = child.wait_with_output();
    let result = match timeout {
        Some(limit) => tokio::time::timeout(limit, wait).await.map_err(|_| limit),
        None => Ok(wait.await),
    };

    if let Some(writer) = writer {
        writer.abort();
    }

    let outcome = match result {
        Ok(Ok(output)) => ExecOutcome::new(output.status.into(), output.stdout, output.stderr),
        Ok(Err(e)) => failed_to_start(format!("failed waiting for `{}`: {}", program_name, e)),
        // The wait future (and the child with it) was dropped; kill_on_drop
        // has already sent SIGKILL.
        Err(limit) => ExecOutcome::new(ExitStatus::TimedOut(limit), Vec::new(), Vec::new()),
    };

    span.record("status", tracing::field::display(&outcome.status));
    span.record("duration_ms", start.elapsed().as_millis() as u64);
    outcome
}

fn failed_to_start(message: String) -> ExecOutcome {
    ExecOutcome::new(ExitStatus::FailedToStart, Vec::new(), message.into_bytes())
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
