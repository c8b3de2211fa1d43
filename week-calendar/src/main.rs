use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use shared::{CalendarCommand, CommandResponse};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use week_calendar::backend::io::handle_command;
use week_calendar::initialize_backend;

/// Reads one JSON command per line on stdin and answers one JSON line per command
fn main() -> Result<()> {
    // Logs go to stderr; stdout carries responses
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let state = initialize_backend().context("Failed to initialize week calendar")?;
    info!("Waiting for commands on stdin");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<CalendarCommand>(&line) {
            Ok(command) => handle_command(&state, &command),
            Err(e) => {
                warn!("Rejecting malformed command: {}", e);
                CommandResponse::Error {
                    message: format!("Malformed command: {}", e),
                }
            }
        };

        serde_json::to_writer(&mut stdout, &response).context("Failed to write response")?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
