//! Shared output formatting for prio CLI commands.

use serde::Serialize;

use crate::error::Result;

pub const SCHEMA_VERSION: &str = "prio.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// User-facing notification sink.
///
/// One short status line is emitted per pass, regardless of whether any file
/// changed, plus one generic line when a run fails.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier printing to stdout; silent under `--quiet` and `--json`
/// (the JSON envelope already carries the per-pass summary).
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    options: OutputOptions,
}

impl ConsoleNotifier {
    pub fn new(options: OutputOptions) -> Self {
        Self { options }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        if !self.options.quiet && !self.options.json {
            println!("{message}");
        }
    }
}

/// Emit a successful run report, as JSON envelope or human summary.
pub fn emit_report<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human_lines: &[String],
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    for line in human_lines {
        println!("{line}");
    }
    Ok(())
}

/// Emit a failed run, as JSON envelope or stderr line.
pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct ErrorBody {
            message: String,
            code: i32,
        }

        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: ErrorBody,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: ErrorBody {
                message: err.to_string(),
                code: err.exit_code(),
            },
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_notifier_respects_quiet_and_json() {
        // Only exercises the gating logic; output itself goes to stdout.
        let loud = ConsoleNotifier::new(OutputOptions {
            json: false,
            quiet: false,
        });
        loud.notify("Priorities updated.");

        let silent = ConsoleNotifier::new(OutputOptions {
            json: true,
            quiet: false,
        });
        silent.notify("never printed");
    }
}
