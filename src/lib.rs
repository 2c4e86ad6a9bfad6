//! prio - daily task list upkeep library
//!
//! This library implements the core of the prio CLI: parsing Markdown task
//! lines with inline fields and indented metadata blocks, aging numeric
//! priorities toward their deadlines, scheduling weekly-recurring tasks, and
//! maintaining completion streaks.
//!
//! # Core Concepts
//!
//! - **Task record**: one checklist line plus its indented `key:: value`
//!   metadata block, re-parsed fresh from text on every run
//! - **Priority aging**: numeric priorities decay daily, floored at 1 and
//!   forced to 1 near the deadline; `/` marks a not-yet-active priority
//! - **Weekly recurrence**: tasks with a `daysOfWeek::` schedule are active
//!   on listed days and pending otherwise
//! - **Streaks**: consecutive on-schedule completions, reset on missed days
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading from `.prio.toml`
//! - `error`: error types and result aliases
//! - `clock`: calendar provider (today, day-of-week letters)
//! - `record`: task line and metadata block parsing, line rewriting
//! - `age`: priority aging engine
//! - `streak`: streak engine
//! - `update`: file update orchestrator (two passes per run)
//! - `vault`: candidate file listing and text I/O
//! - `output`: report and notification formatting

pub mod age;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod output;
pub mod record;
pub mod streak;
pub mod update;
pub mod vault;

pub use error::{Error, Result};
