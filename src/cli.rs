//! Command-line interface for prio
//!
//! Defines the CLI structure using clap derive macros and dispatches into
//! the orchestrator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{emit_report, ConsoleNotifier, OutputOptions};
use crate::update::{Pass, RunReport, Updater};
use crate::vault::DirVault;

/// prio - daily priority aging and streak upkeep for plain-text task lists
///
/// Scans Markdown task files in a vault, decays numeric priorities as
/// deadlines approach, schedules weekly-recurring tasks, and maintains
/// completion streaks.
#[derive(Parser, Debug)]
#[command(name = "prio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vault directory (defaults to the current directory)
    #[arg(long, global = true, env = "PRIO_VAULT")]
    pub vault: Option<PathBuf>,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the aging pass, then the streak pass
    Update {
        /// Plan and report edits without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Run only the priority aging pass
    Age {
        /// Plan and report edits without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Run only the streak pass
    Streaks {
        /// Plan and report edits without writing any file
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let vault_root = match self.vault {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        let clock = resolve_clock(self.today.as_deref())?;
        let today = clock.today();

        let config = Config::load_from_vault(&vault_root);
        let vault = DirVault::new(vault_root)?;
        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };
        let notifier = ConsoleNotifier::new(options);

        let (command_name, report) = match self.command {
            Commands::Update { dry_run } => {
                let updater = Updater::new(&vault, &notifier, &config).dry_run(dry_run);
                ("update", updater.run(today)?)
            }
            Commands::Age { dry_run } => {
                let updater = Updater::new(&vault, &notifier, &config).dry_run(dry_run);
                let pass = updater.run_pass(Pass::Aging, today)?;
                (
                    "age",
                    RunReport {
                        today,
                        dry_run,
                        passes: vec![pass],
                    },
                )
            }
            Commands::Streaks { dry_run } => {
                let updater = Updater::new(&vault, &notifier, &config).dry_run(dry_run);
                let pass = updater.run_pass(Pass::Streaks, today)?;
                (
                    "streaks",
                    RunReport {
                        today,
                        dry_run,
                        passes: vec![pass],
                    },
                )
            }
        };

        emit_report(options, command_name, &report, &report.human_lines())
    }
}

/// Calendar provider for this invocation: a clock pinned to `--today` when
/// given, the system clock otherwise.
fn resolve_clock(raw: Option<&str>) -> Result<Box<dyn Clock>> {
    match raw {
        Some(raw) => {
            let trimmed = raw.trim();
            let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map_err(|_| Error::InvalidDate(trimmed.to_string()))?;
            Ok(Box::new(FixedClock(date)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Best-effort command name for error envelopes, read before clap parsing.
pub fn infer_command_name_from_args() -> String {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .unwrap_or_else(|| "prio".to_string())
}
