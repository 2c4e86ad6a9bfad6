//! prio - daily priority aging and streak upkeep CLI
//!
//! Reads Markdown task files from a vault and runs the daily aging and
//! streak passes over them.

use clap::Parser;
use prio::cli::{infer_command_name_from_args, Cli};
use prio::output::emit_error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Keep startup robust in cron/robot envs: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let command = infer_command_name_from_args();
    let cli = Cli::parse();
    let json = cli.json;
    if let Err(err) = cli.run() {
        tracing::error!(%err, "daily update failed");
        eprintln!("Daily update failed - see log for details.");
        let _ = emit_error(&command, &err, json);
        std::process::exit(err.exit_code());
    }
}
