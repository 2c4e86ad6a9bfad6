//! Priority aging engine.
//!
//! Numeric priorities decay by one per day since creation, floored at 1 and
//! forced to 1 once the deadline is two days out or closer. A pending `/`
//! priority flips to 1 on the deadline day. Weekly-recurring tasks carrying a
//! `daysOfWeek` schedule bypass all of that: they are 1 on scheduled days and
//! `/` otherwise.

use chrono::NaiveDate;

use crate::clock::day_letter_for;
use crate::record::{replace_priority, Edit, Priority, TaskRecord};

/// Deadline proximity, in days, at which a numeric priority is forced to 1.
const DEADLINE_WINDOW_DAYS: i64 = 2;

/// Plan the priority rewrite for one task record, if any.
///
/// Returns `None` when no aging rule applies or the priority is already at
/// its target value, so a second run with the same `today` never rewrites.
pub fn plan(record: &TaskRecord, lines: &[String], today: NaiveDate) -> Option<Edit> {
    let current = record.priority?;

    // Weekly schedule wins over deadline aging outright.
    if record.recurring {
        if let Some(days) = &record.days_of_week {
            let target = if days.contains(day_letter_for(today)) {
                Priority::Value(1)
            } else {
                Priority::Pending
            };
            return rewrite(record, lines, current, target);
        }
    }

    // Deadline aging only tracks open tasks.
    if record.checked {
        return None;
    }
    let deadline = record.deadline?;

    match current {
        Priority::Pending => {
            if today >= deadline {
                rewrite(record, lines, current, Priority::Value(1))
            } else {
                None
            }
        }
        Priority::Value(_) => {
            let start_prio = record.start_prio?;
            let created = record.created?;

            let days_since_created = (today - created).num_days();
            let mut aged = (i64::from(start_prio) - days_since_created).max(1);
            if (deadline - today).num_days() <= DEADLINE_WINDOW_DAYS {
                aged = 1;
            }

            let target = Priority::Value(u32::try_from(aged).unwrap_or(u32::MAX));
            rewrite(record, lines, current, target)
        }
    }
}

fn rewrite(
    record: &TaskRecord,
    lines: &[String],
    current: Priority,
    target: Priority,
) -> Option<Edit> {
    if target == current {
        return None;
    }
    Some(Edit {
        line: record.line,
        text: replace_priority(&lines[record.line], target),
    })
}
