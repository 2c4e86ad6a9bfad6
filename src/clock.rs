//! Calendar provider for prio
//!
//! The engines never read the wall clock directly; they take dates from a
//! `Clock` so that runs are scriptable (`--today`) and testable.

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Source of "today" for a run.
pub trait Clock: std::fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Single-letter day code for a weekday.
///
/// Thursday is R and Sunday is U so that every day gets a distinct letter.
pub fn day_letter(weekday: Weekday) -> char {
    match weekday {
        Weekday::Mon => 'M',
        Weekday::Tue => 'T',
        Weekday::Wed => 'W',
        Weekday::Thu => 'R',
        Weekday::Fri => 'F',
        Weekday::Sat => 'S',
        Weekday::Sun => 'U',
    }
}

/// Day code for a specific date.
pub fn day_letter_for(date: NaiveDate) -> char {
    day_letter(date.weekday())
}
