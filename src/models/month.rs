// SPDX-License-Identifier: MIT

//! Calendar month keys with year-major ordering.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

/// A (year, month) pair identifying one calendar month.
///
/// The canonical textual form is `MM/YYYY`. Ordering compares year before
/// month, never the raw text: a lexical sort would put `01/2022` before
/// `12/2021`. Field order matters here, the derived `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Build a key, rejecting months outside 1-12 and years chrono cannot
    /// represent as dates.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (0..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Truncate a date to its month.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// First day of the month, used as the ISO 8601 form in JSON output.
    pub fn first_day(self) -> NaiveDate {
        // `new` only admits months 1-12 and years 0-9999.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated month key")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// Error for `MonthKey` parsing.
#[derive(Debug, thiserror::Error)]
#[error("invalid month key {0:?} (expected MM/YYYY)")]
pub struct ParseMonthKeyError(String);

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMonthKeyError(s.to_string());
        let (month, year) = s.split_once('/').ok_or_else(invalid)?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        MonthKey::new(year, month).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_year_before_month() {
        let dec_2021: MonthKey = "12/2021".parse().unwrap();
        let jan_2022: MonthKey = "01/2022".parse().unwrap();
        let sep_2021: MonthKey = "09/2021".parse().unwrap();

        assert!(dec_2021 < jan_2022);
        assert!(sep_2021 < dec_2021);
        assert!(sep_2021 < jan_2022);
    }

    #[test]
    fn test_display_round_trips() {
        let key = MonthKey::new(2021, 9).unwrap();
        assert_eq!(key.to_string(), "09/2021");
        assert_eq!("09/2021".parse::<MonthKey>().unwrap(), key);
    }

    #[test]
    fn test_rejects_invalid_text() {
        assert!("13/2021".parse::<MonthKey>().is_err());
        assert!("00/2021".parse::<MonthKey>().is_err());
        assert!("2021-11".parse::<MonthKey>().is_err());
        assert!("".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_from_date_and_first_day() {
        let date = NaiveDate::from_ymd_opt(2021, 11, 20).unwrap();
        let key = MonthKey::from_date(date);
        assert_eq!(key.to_string(), "11/2021");
        assert_eq!(key.first_day(), NaiveDate::from_ymd_opt(2021, 11, 1).unwrap());
    }
}
