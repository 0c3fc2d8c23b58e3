// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! qr: Run typed text as a command, or hand text and files to commands

mod commands;
mod env;
mod exit_error;
mod output;
mod settings_file;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qr_adapters::{InteractiveShell, TokioProcessAdapter};
use qr_core::{ActionKind, Item};
use qr_engine::{Engine, SOURCE_DESCRIPTION};
use tracing_subscriber::EnvFilter;

use crate::commands::{act, actions, resolve, text_or_stdin};
use crate::exit_error::ExitError;
use crate::output::OutputFormat;
use crate::settings_file::SettingsFile;

#[derive(Parser)]
#[command(name = "qr", version, about = SOURCE_DESCRIPTION)]
struct Cli {
    /// Also match interactive-shell aliases
    #[arg(long, global = true)]
    aliases: bool,

    /// Also match interactive-shell functions
    #[arg(long, global = true)]
    functions: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the commands TEXT could run, best first
    Resolve {
        /// Text to interpret (read from stdin if omitted)
        text: Option<String>,

        #[arg(short = 'o', long = "output", value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List the actions and what each one does
    Actions {
        #[arg(short = 'o', long = "output", value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Run a command and print its output (killed after 15s)
    Run {
        /// Command text, or a path to an executable file
        target: String,
    },
    /// Run a command without a time limit, discarding its output
    Exec {
        /// Command text, or a path to an executable file
        target: String,
    },
    /// Run each command once with all items as extra arguments
    Pass {
        /// Text or file paths to pass
        #[arg(required = true)]
        items: Vec<String>,

        /// Commands to run
        #[arg(long = "to", required = true)]
        targets: Vec<String>,
    },
    /// Send text to a command's standard input
    Write {
        /// Text to send (read from stdin if omitted)
        text: Option<String>,

        #[arg(long = "to")]
        target: String,
    },
    /// Send text through a command and print what it returns
    Filter {
        /// Text to send (read from stdin if omitted)
        text: Option<String>,

        #[arg(long = "to")]
        target: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = dispatch(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("qr: {}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("qr: {e:#}");
                1
            }
        };
        std::process::exit(code);
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let settings = SettingsFile::from_env()
        .force(cli.aliases, cli.functions)
        .current()?;
    let mut engine = Engine::new(TokioProcessAdapter::new(), InteractiveShell::new());

    let (action, items, targets) = match cli.command {
        Command::Resolve { text, format } => {
            return resolve::handle(&mut engine, &text_or_stdin(text)?, settings, format);
        }
        Command::Actions { format } => return actions::handle(format),
        Command::Run { target } => (ActionKind::RunAndCapture, Vec::new(), vec![target]),
        Command::Exec { target } => (ActionKind::Execute, Vec::new(), vec![target]),
        Command::Pass { items, targets } => {
            let items: Vec<Item> = items.iter().map(|arg| act::parse_item(arg)).collect();
            (ActionKind::PassToCommand, items, targets)
        }
        Command::Write { text, target } => {
            let items = vec![Item::text(text_or_stdin(text)?)];
            (ActionKind::WriteToCommand, items, vec![target])
        }
        Command::Filter { text, target } => {
            let items = vec![Item::text(text_or_stdin(text)?)];
            (ActionKind::FilterThroughCommand, items, vec![target])
        }
    };
    act::perform(&mut engine, action, &items, &targets, settings).await
}
