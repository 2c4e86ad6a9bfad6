//! Task record parsing and line rewriting.
//!
//! A task line is a Markdown checklist item carrying inline fields:
//!
//! ```text
//! - [ ] Water the plants [🎯:: 3] [⏳:: 2024-02-01] 🔁
//!     - start_prio:: 10
//!     - created:: 2024-01-20
//!     - daysOfWeek:: W,S,U
//!     - streak:: 4
//!     - streak_start:: 2024-01-16
//! ```
//!
//! The metadata block is the maximal run of indented list items directly
//! below the task line; keys may appear in any order and unrecognized lines
//! are skipped. Every parsed field remembers its source line index so the
//! engines can rewrite it in place without touching sibling lines.
//!
//! Parse failures are never errors: a line that does not match simply yields
//! no record, and a malformed value leaves its field absent, which makes the
//! dependent rule inapplicable downstream.

use std::fmt;

use chrono::NaiveDate;

/// Pending checkbox marker at the start of a task line.
pub const CHECKBOX_PENDING: &str = "- [ ]";
/// Done checkbox marker at the start of a task line.
pub const CHECKBOX_DONE: &str = "- [x]";
/// Opening of the inline priority field.
pub const PRIORITY_OPEN: &str = "[🎯:: ";
/// Opening of the inline deadline field.
pub const DEADLINE_OPEN: &str = "[⏳:: ";
/// Recurrence marker token.
pub const RECURRENCE_MARK: &str = "🔁";
/// Completion date marker, followed by a YYYY-MM-DD date.
pub const COMPLETION_MARK: &str = "✅ ";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_LEN: usize = 10;
const DAY_LETTERS: &str = "MTWRFSU";

/// Inline priority value: a positive number or the pending sentinel `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Not yet active, written as `/`.
    Pending,
    /// Numeric priority.
    Value(u32),
}

impl Priority {
    /// Parse the raw token between `[🎯:: ` and `]`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw == "/" {
            Some(Priority::Pending)
        } else if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse().ok().map(Priority::Value)
        } else {
            None
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Pending => write!(f, "/"),
            Priority::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Weekly schedule: the set of day letters a recurring task is due on.
///
/// Letters are normalized to uppercase; Thursday is `R`, Sunday is `U`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySet(Vec<char>);

impl DaySet {
    /// Parse a comma-separated day list such as `W,S,U` or `m, t`.
    ///
    /// Whitespace is stripped before splitting. Returns `None` when any
    /// entry is not a single valid day letter.
    pub fn parse(raw: &str) -> Option<Self> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return None;
        }
        let mut days = Vec::new();
        for token in compact.split(',') {
            let mut chars = token.chars();
            let letter = chars.next()?.to_ascii_uppercase();
            if chars.next().is_some() || !DAY_LETTERS.contains(letter) {
                return None;
            }
            if !days.contains(&letter) {
                days.push(letter);
            }
        }
        Some(DaySet(days))
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter.to_ascii_uppercase())
    }
}

/// A metadata value together with the index of the line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<T> {
    pub value: T,
    pub line: usize,
}

/// One task line plus its parsed metadata block.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    /// Index of the task line itself.
    pub line: usize,
    pub checked: bool,
    pub recurring: bool,
    pub priority: Option<Priority>,
    pub deadline: Option<NaiveDate>,
    /// Completion date from the `✅` token, if any.
    pub completed_on: Option<NaiveDate>,
    pub start_prio: Option<u32>,
    pub created: Option<NaiveDate>,
    pub days_of_week: Option<DaySet>,
    pub streak: Option<Field<u32>>,
    pub streak_start: Option<Field<NaiveDate>>,
    /// First line index past the metadata block.
    pub block_end: usize,
}

/// A single-line replacement produced by an engine, applied after the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub line: usize,
    pub text: String,
}

/// Parse the line at `index` (and its metadata block) into a task record.
///
/// Returns `None` when the line does not start with a checkbox marker.
pub fn parse_task(lines: &[String], index: usize) -> Option<TaskRecord> {
    let line = lines.get(index)?;
    let checked = if line.starts_with(CHECKBOX_PENDING) {
        false
    } else if line.starts_with(CHECKBOX_DONE) {
        true
    } else {
        return None;
    };

    let mut record = TaskRecord {
        line: index,
        checked,
        recurring: line.contains(RECURRENCE_MARK),
        priority: bracket_field(line, PRIORITY_OPEN).and_then(Priority::parse),
        deadline: bracket_field(line, DEADLINE_OPEN).and_then(parse_date),
        completed_on: completion_date(line),
        start_prio: None,
        created: None,
        days_of_week: None,
        streak: None,
        streak_start: None,
        block_end: index + 1,
    };

    let mut next = index + 1;
    while next < lines.len() && is_metadata_line(&lines[next]) {
        scan_metadata_line(&lines[next], next, &mut record);
        next += 1;
    }
    record.block_end = next;

    Some(record)
}

/// Whether a line has the "indented list item" shape that continues a
/// metadata block.
fn is_metadata_line(line: &str) -> bool {
    let rest = line.trim_start_matches([' ', '\t']);
    rest.len() < line.len() && rest.starts_with("- ")
}

/// Harvest at most one recognized key from a metadata line.
fn scan_metadata_line(line: &str, index: usize, record: &mut TaskRecord) {
    let body = line.trim().trim_start_matches('-').trim_start();

    if let Some(raw) = key_value(body, "start_prio") {
        record.start_prio = leading_number(raw);
    } else if let Some(raw) = key_value(body, "created") {
        record.created = parse_date(raw);
    } else if let Some(raw) = key_value(body, "daysOfWeek") {
        record.days_of_week = DaySet::parse(raw);
    } else if let Some(raw) = key_value(body, "streak") {
        record.streak = leading_number(raw).map(|value| Field { value, line: index });
    } else if let Some(raw) = key_value(body, "streak_start") {
        record.streak_start = parse_date(raw).map(|value| Field { value, line: index });
    }
}

/// Split `key:: value`, matching the key case-insensitively.
fn key_value<'a>(body: &'a str, key: &str) -> Option<&'a str> {
    let (head, tail) = body.split_once("::")?;
    if head.trim().eq_ignore_ascii_case(key) {
        Some(tail.trim())
    } else {
        None
    }
}

/// Extract the raw value of a `[marker value]` field on the task line.
fn bracket_field<'a>(line: &'a str, open: &str) -> Option<&'a str> {
    let start = line.find(open)? + open.len();
    let end = line[start..].find(']')? + start;
    Some(line[start..end].trim())
}

/// Parse the `✅ YYYY-MM-DD` token, if present.
fn completion_date(line: &str) -> Option<NaiveDate> {
    let start = line.find(COMPLETION_MARK)? + COMPLETION_MARK.len();
    let token: String = line[start..].chars().take(DATE_LEN).collect();
    parse_date(&token)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn leading_number(raw: &str) -> Option<u32> {
    let digits: &str = raw
        .split_once(|c: char| !c.is_ascii_digit())
        .map(|(head, _)| head)
        .unwrap_or(raw);
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Rewrite the priority field on a task line.
pub fn replace_priority(line: &str, new: Priority) -> String {
    let Some(start) = line.find(PRIORITY_OPEN) else {
        return line.to_string();
    };
    let value_start = start + PRIORITY_OPEN.len();
    let Some(end) = line[value_start..].find(']') else {
        return line.to_string();
    };
    format!(
        "{}{}{}",
        &line[..value_start],
        new,
        &line[value_start + end..]
    )
}

/// Rewrite the value of a `key:: value` metadata line, leaving everything
/// around the value token untouched.
pub fn replace_metadata_value(line: &str, key: &str, new_value: &str) -> String {
    let marker = format!("{key}::");
    let Some(key_start) = line.find(&marker) else {
        return line.to_string();
    };
    let after_key = key_start + marker.len();
    let value_offset = line[after_key..]
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len() - after_key);
    let value_start = after_key + value_offset;
    let value_len = line[value_start..]
        .find(char::is_whitespace)
        .unwrap_or(line.len() - value_start);
    format!(
        "{}{}{}",
        &line[..value_start],
        new_value,
        &line[value_start + value_len..]
    )
}

/// Flip `- [x]` back to `- [ ]` and strip the `✅ YYYY-MM-DD` token.
pub fn uncheck_and_strip_completion(line: &str) -> String {
    let unchecked = line.replacen(CHECKBOX_DONE, CHECKBOX_PENDING, 1);
    let stripped = match unchecked.find(COMPLETION_MARK) {
        Some(start) => {
            let value_start = start + COMPLETION_MARK.len();
            let token_len: usize = unchecked[value_start..]
                .chars()
                .take(DATE_LEN)
                .map(char::len_utf8)
                .sum();
            format!(
                "{}{}",
                &unchecked[..start],
                &unchecked[value_start + token_len..]
            )
        }
        None => unchecked,
    };
    stripped.trim_end().to_string()
}
