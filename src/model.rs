//! Special day model and derived display rows.

use crate::error::ViewError;
use crate::{format, interval};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user-named date tracked for interval display (a birthday, an
/// anniversary).
///
/// `name` is the entry's key within the list: the store keeps at most
/// one day per name, last write wins. `date` serializes as
/// `yyyy-MM-dd`, the layout the persisted list has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDay {
    pub name: String,
    pub date: NaiveDate,
}

impl SpecialDay {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

/// A display row derived from a [`SpecialDay`] and the current day.
///
/// Recomputed on every read; never persisted. Its only identity is the
/// source day's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialDayView {
    pub name: String,
    /// Gregorian display string (`西暦1980年5月26日`).
    pub date: String,
    /// Era display string (`昭和55年5月26日`).
    pub era_date: String,
    /// Elapsed interval up to `today` (`42 年 1 カ月 2 日`).
    pub age: String,
}

impl SpecialDayView {
    /// Builds the row for `day` as of `today`.
    ///
    /// # Errors
    ///
    /// Formatting and interval failures surface synchronously: a date
    /// outside the era table or in the future is an error, not a blank
    /// cell.
    pub fn build(day: &SpecialDay, today: NaiveDate) -> Result<Self, ViewError> {
        Ok(Self {
            name: day.name.clone(),
            date: format::gregorian(day.date),
            era_date: format::japanese_era(day.date)?,
            age: interval::between(day.date, today)?.to_string(),
        })
    }
}
