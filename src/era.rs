//! Japanese era (元号) table and lookup.

use crate::error::FormatError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use strum::{EnumIter, IntoEnumIterator};

/// Eras supported by the formatter, oldest first.
///
/// The table starts at the Meiji epoch; earlier dates are not
/// representable and must be rejected by the caller-facing API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Era {
    Meiji,
    Taisho,
    Showa,
    Heisei,
    Reiwa,
}

// (year, month, day) of each era's first day, Gregorian.
static ERA_STARTS: Lazy<Vec<(Era, NaiveDate)>> = Lazy::new(|| {
    Era::iter()
        .map(|era| {
            let (y, m, d) = match era {
                Era::Meiji => (1868, 1, 25),
                Era::Taisho => (1912, 7, 30),
                Era::Showa => (1926, 12, 25),
                Era::Heisei => (1989, 1, 8),
                Era::Reiwa => (2019, 5, 1),
            };
            let start = NaiveDate::from_ymd_opt(y, m, d).expect("era start dates are valid");
            (era, start)
        })
        .collect()
});

impl Era {
    /// The era's kanji name as rendered in display strings.
    pub fn kanji(self) -> &'static str {
        match self {
            Era::Meiji => "明治",
            Era::Taisho => "大正",
            Era::Showa => "昭和",
            Era::Heisei => "平成",
            Era::Reiwa => "令和",
        }
    }

    /// First day of the era, Gregorian.
    pub fn start(self) -> NaiveDate {
        ERA_STARTS
            .iter()
            .find(|(era, _)| *era == self)
            .expect("every era has a table entry")
            .1
    }

    /// The era a date falls in: the latest era whose start is `<= date`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::BeforeEraTable`] for dates before the
    /// Meiji epoch.
    pub fn for_date(date: NaiveDate) -> Result<Era, FormatError> {
        ERA_STARTS
            .iter()
            .rev()
            .find(|(_, start)| *start <= date)
            .map(|(era, _)| *era)
            .ok_or(FormatError::BeforeEraTable { date })
    }

    /// In-era year number for a date within this era (start year is 1).
    ///
    /// Every era starts partway through its first calendar year, so the
    /// calendar-year difference plus one is exact.
    pub fn year_of(self, date: NaiveDate) -> i32 {
        date.year() - self.start().year() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reiwa_lookup() {
        assert_eq!(Era::for_date(date(2022, 11, 10)).unwrap(), Era::Reiwa);
    }

    #[test]
    fn showa_lookup() {
        assert_eq!(Era::for_date(date(1980, 5, 26)).unwrap(), Era::Showa);
    }

    #[test]
    fn heisei_reiwa_boundary() {
        assert_eq!(Era::for_date(date(2019, 4, 30)).unwrap(), Era::Heisei);
        assert_eq!(Era::for_date(date(2019, 5, 1)).unwrap(), Era::Reiwa);
    }

    #[test]
    fn showa_heisei_boundary() {
        assert_eq!(Era::for_date(date(1989, 1, 7)).unwrap(), Era::Showa);
        assert_eq!(Era::for_date(date(1989, 1, 8)).unwrap(), Era::Heisei);
    }

    #[test]
    fn meiji_epoch_is_first_supported_day() {
        assert_eq!(Era::for_date(date(1868, 1, 25)).unwrap(), Era::Meiji);
        assert_eq!(
            Era::for_date(date(1868, 1, 24)).unwrap_err(),
            FormatError::BeforeEraTable {
                date: date(1868, 1, 24)
            }
        );
    }

    #[test]
    fn year_numbering() {
        assert_eq!(Era::Reiwa.year_of(date(2019, 11, 1)), 1);
        assert_eq!(Era::Reiwa.year_of(date(2022, 11, 10)), 4);
        assert_eq!(Era::Showa.year_of(date(1980, 5, 26)), 55);
        // Showa ran until its 64th year (January 1989).
        assert_eq!(Era::Showa.year_of(date(1989, 1, 7)), 64);
    }

    #[test]
    fn table_is_ordered() {
        let starts: Vec<NaiveDate> = Era::iter().map(Era::start).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }
}
