//! Display and storage formatting for calendar dates.

use crate::era::Era;
use crate::error::FormatError;
use chrono::{Datelike, NaiveDate};

/// Date layout used by the persisted store (`yyyy-MM-dd`).
pub const STORAGE_FORMAT: &str = "%Y-%m-%d";

/// Renders a date in the Gregorian long form: `西暦2022年11月10日`.
///
/// Month and day are unpadded, matching the long-form locale output the
/// display rows expect.
pub fn gregorian(date: NaiveDate) -> String {
    format!(
        "西暦{}年{}月{}日",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Renders a date in the Japanese era calendar: `令和4年11月10日`.
///
/// The first year of an era is spelled `元年`, never `1年`.
///
/// # Errors
///
/// Returns [`FormatError::BeforeEraTable`] for dates before the Meiji
/// epoch.
pub fn japanese_era(date: NaiveDate) -> Result<String, FormatError> {
    let era = Era::for_date(date)?;
    let year = era.year_of(date);
    let year_part = if year == 1 {
        "元".to_string()
    } else {
        year.to_string()
    };
    Ok(format!(
        "{}{}年{}月{}日",
        era.kanji(),
        year_part,
        date.month(),
        date.day()
    ))
}

/// Formats a date for the persisted store.
pub fn for_storage(date: NaiveDate) -> String {
    date.format(STORAGE_FORMAT).to_string()
}

/// Parses a stored `yyyy-MM-dd` string back into a date.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] when the input is not a valid
/// calendar date in the storage layout.
pub fn from_storage(input: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(input, STORAGE_FORMAT).map_err(|_| FormatError::InvalidDate {
        input: input.to_string(),
    })
}
