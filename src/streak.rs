//! Streak engine for recurring tasks.
//!
//! A streak is a run of consecutive days a recurring task was completed.
//! State lives in two metadata fields: `streak` (the length) and
//! `streak_start` (the first counted day), so the most recent counted day is
//! `streak_start + (streak - 1)`.
//!
//! Run once per day: a task completed yesterday extends its streak and has
//! its checkbox reset for today; a gap resets the counter to zero starting
//! today. Tasks without both streak fields are not streak-tracked.

use chrono::{Duration, NaiveDate};

use crate::record::{
    replace_metadata_value, uncheck_and_strip_completion, Edit, TaskRecord,
};

/// Plan the streak rewrites for one task record.
///
/// Returns an empty list for non-recurring or untracked tasks, and never
/// plans a redundant rewrite (an unchecked task whose streak is already zero
/// is left alone).
pub fn plan(
    record: &TaskRecord,
    lines: &[String],
    today: NaiveDate,
    yesterday: NaiveDate,
) -> Vec<Edit> {
    if !record.recurring {
        return Vec::new();
    }
    let (Some(streak), Some(streak_start)) = (record.streak, record.streak_start) else {
        return Vec::new();
    };

    let mut edits = Vec::new();
    let last_done = streak_start.value + Duration::days(i64::from(streak.value) - 1);

    if record.checked {
        let Some(done) = record.completed_on else {
            // Checked but never stamped with a completion date: nothing to count.
            return edits;
        };

        if done == yesterday {
            edits.push(set_streak(lines, streak.line, streak.value + 1));
        } else if done < yesterday {
            // A gap: the old streak is gone, a fresh one starts today.
            edits.push(set_streak(lines, streak.line, 0));
            edits.push(set_streak_start(lines, streak_start.line, today));
        }

        // Yesterday's (or older) completion has been absorbed; reopen the box.
        if done != today {
            edits.push(Edit {
                line: record.line,
                text: uncheck_and_strip_completion(&lines[record.line]),
            });
        }
    } else {
        let missed_days = (yesterday - last_done).num_days();
        if missed_days >= 1 && streak.value != 0 {
            edits.push(set_streak(lines, streak.line, 0));
            edits.push(set_streak_start(lines, streak_start.line, today));
        }
    }

    edits
}

fn set_streak(lines: &[String], line: usize, value: u32) -> Edit {
    Edit {
        line,
        text: replace_metadata_value(&lines[line], "streak", &value.to_string()),
    }
}

fn set_streak_start(lines: &[String], line: usize, date: NaiveDate) -> Edit {
    Edit {
        line,
        text: replace_metadata_value(
            &lines[line],
            "streak_start",
            &date.format("%Y-%m-%d").to_string(),
        ),
    }
}
