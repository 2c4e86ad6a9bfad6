//! File update orchestrator.
//!
//! A run is two sequential full passes over every candidate file: priority
//! aging first, then streak upkeep. Each pass reads a file, splits it into
//! lines, plans explicit `(line, text)` edits from the parsed task records,
//! applies them in one sweep, and writes the file back only when something
//! changed. The streak pass re-reads from storage, so lines rewritten by the
//! aging pass are re-parsed from the freshest text.
//!
//! Per-line parse mismatches are skipped silently; a storage failure aborts
//! the whole run, leaving earlier writes in place.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::output::Notifier;
use crate::record::{self, Edit};
use crate::vault::Vault;
use crate::{age, streak};

/// The two daily passes, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Aging,
    Streaks,
}

impl Pass {
    pub fn name(self) -> &'static str {
        match self {
            Pass::Aging => "aging",
            Pass::Streaks => "streaks",
        }
    }

    fn notice(self) -> &'static str {
        match self {
            Pass::Aging => "Priorities updated.",
            Pass::Streaks => "Streaks updated.",
        }
    }
}

/// Summary of one pass over all candidate files.
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    pub pass: &'static str,
    pub files_scanned: usize,
    pub files_changed: usize,
    pub lines_changed: usize,
}

/// Summary of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub today: NaiveDate,
    pub dry_run: bool,
    pub passes: Vec<PassReport>,
}

impl RunReport {
    pub fn human_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for pass in &self.passes {
            lines.push(format!(
                "{}: {} file(s) scanned, {} changed, {} line(s) rewritten{}",
                pass.pass,
                pass.files_scanned,
                pass.files_changed,
                pass.lines_changed,
                if self.dry_run { " (dry run)" } else { "" }
            ));
        }
        lines
    }
}

/// Runs the daily passes against a vault.
pub struct Updater<'a> {
    vault: &'a dyn Vault,
    notifier: &'a dyn Notifier,
    config: &'a Config,
    dry_run: bool,
}

impl<'a> Updater<'a> {
    pub fn new(vault: &'a dyn Vault, notifier: &'a dyn Notifier, config: &'a Config) -> Self {
        Self {
            vault,
            notifier,
            config,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run both passes: aging, then streaks.
    pub fn run(&self, today: NaiveDate) -> Result<RunReport> {
        let aging = self.run_pass(Pass::Aging, today)?;
        let streaks = self.run_pass(Pass::Streaks, today)?;
        Ok(RunReport {
            today,
            dry_run: self.dry_run,
            passes: vec![aging, streaks],
        })
    }

    /// Run a single pass over every candidate file.
    pub fn run_pass(&self, pass: Pass, today: NaiveDate) -> Result<PassReport> {
        debug!(pass = pass.name(), %today, "starting pass");
        let yesterday = today - Duration::days(1);

        let mut report = PassReport {
            pass: pass.name(),
            files_scanned: 0,
            files_changed: 0,
            lines_changed: 0,
        };

        for path in self.vault.candidates(&self.config.files)? {
            let text = self.vault.read(&path)?;
            let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();

            let mut edits: Vec<Edit> = Vec::new();
            for index in 0..lines.len() {
                let Some(task) = record::parse_task(&lines, index) else {
                    continue;
                };
                match pass {
                    Pass::Aging => edits.extend(age::plan(&task, &lines, today)),
                    Pass::Streaks => {
                        edits.extend(streak::plan(&task, &lines, today, yesterday))
                    }
                }
            }

            report.files_scanned += 1;
            if edits.is_empty() {
                debug!(file = %path.display(), "no changes");
                continue;
            }

            for edit in &edits {
                lines[edit.line] = edit.text.clone();
            }
            report.files_changed += 1;
            report.lines_changed += edits.len();

            if !self.dry_run {
                self.vault.write(&path, &lines.join("\n"))?;
            }
            info!(
                pass = pass.name(),
                file = %path.display(),
                edits = edits.len(),
                dry_run = self.dry_run,
                "updated file"
            );
        }

        self.notifier.notify(pass.notice());
        Ok(report)
    }
}
