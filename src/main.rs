mod dispatch;
mod domain;
mod environment;
mod permission;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead};

use dispatch::dispatch;
use domain::{DispatchOutcome, PushEvent};
use environment::{DesktopEnvironment, HostEnvironment};
use permission::request_notification_permission;

#[derive(Parser)]
#[command(name = "pling")]
#[command(about = "A small desktop notifier for chat push events", long_about = None)]
struct Cli {
    /// Log suppressed events too
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Request notification permission once and print the outcome
    Permission,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    let env = DesktopEnvironment::new();

    match cli.command {
        Some(Commands::Permission) => {
            let outcome = request_notification_permission(&env);
            println!("{}", outcome.sentinel());
            Ok(())
        }
        None => run_dispatcher(&env),
    }
}

/// Handle JSON-line events from stdin until the stream closes
///
/// Expects one event object per line, e.g. piped from an SSE client:
///   curl -Ns https://chat.example/events | pling
fn run_dispatcher(env: &dyn HostEnvironment) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event = match PushEvent::from_json_line(&line) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Skipping malformed event line: {}", e);
                continue;
            }
        };

        match dispatch(env, &event) {
            DispatchOutcome::Notified(category) => {
                log::info!("Notified {:?} for event '{}'", category, event.kind);
            }
            DispatchOutcome::Suppressed(reason) => {
                log::debug!("Suppressed event '{}': {:?}", event.kind, reason);
            }
        }
    }

    Ok(())
}
