//! Calendar-aware intervals between two dates.

use crate::error::InvalidRangeError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A whole-unit decomposition of the span between two dates.
///
/// This is a calendar difference, not elapsed days divided by 365/30:
/// "one month" spans however many days the calendar says it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 年 {} カ月 {} 日", self.years, self.months, self.days)
    }
}

/// Decomposes `end - start` into whole years, months and days.
///
/// Borrow rule: when `end`'s day-of-month is smaller than `start`'s,
/// one month is borrowed and the length of the month preceding `end`
/// is added to the day component; when the month difference then goes
/// negative, one year is borrowed as twelve months.
///
/// # Errors
///
/// Returns [`InvalidRangeError`] when `end < start`. Reversed ranges
/// have no defined decomposition here; see DESIGN.md.
pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Interval, InvalidRangeError> {
    if end < start {
        return Err(InvalidRangeError { start, end });
    }

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    let mut days = end.day() as i32 - start.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_preceding_month(end);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(Interval {
        years,
        months,
        days,
    })
}

/// Renders the interval as `"{Y} 年 {M} カ月 {D} 日"`.
///
/// # Errors
///
/// Same contract as [`between`].
pub fn between_string(start: NaiveDate, end: NaiveDate) -> Result<String, InvalidRangeError> {
    between(start, end).map(|interval| interval.to_string())
}

// Length of the month before the one `date` falls in.
fn days_in_preceding_month(date: NaiveDate) -> i32 {
    let first = date.with_day(1).expect("day 1 is valid in every month");
    let last_of_prev = first.pred_opt().expect("dates after 1 CE have a predecessor");
    last_of_prev.day() as i32
}
