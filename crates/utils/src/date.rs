//! Calendar helpers on top of `chrono`.
//!
//! Everything here is timezone-agnostic: functions take any value that
//! implements [`Datelike`]/[`Timelike`] or work on [`NaiveDateTime`] directly.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use utilkit_core::{Error, Result};

static TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new("YYYY|MM|DD|HH|mm|ss").expect("date token pattern is valid"));

const SECONDS_PER_DAY: i64 = 86_400;

/// Difference between two instants split into whole units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDiff {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Replaces `YYYY`, `MM`, `DD`, `HH`, `mm` and `ss` in `pattern`.
///
/// Everything else in the pattern is copied verbatim.
///
/// ```
/// use chrono::NaiveDate;
/// use utilkit_utils::date::format;
///
/// let dt = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(14, 30, 0).unwrap();
/// assert_eq!(format(&dt, "YYYY-MM-DD HH:mm:ss"), "2023-01-01 14:30:00");
/// assert_eq!(format(&dt, "YYYY年MM月DD日"), "2023年01月01日");
/// ```
#[must_use]
pub fn format<T: Datelike + Timelike>(date: &T, pattern: &str) -> String {
    TOKENS
        .replace_all(pattern, |caps: &Captures<'_>| match &caps[0] {
            "YYYY" => date.year().to_string(),
            "MM" => format!("{:02}", date.month()),
            "DD" => format!("{:02}", date.day()),
            "HH" => format!("{:02}", date.hour()),
            "mm" => format!("{:02}", date.minute()),
            _ => format!("{:02}", date.second()),
        })
        .into_owned()
}

/// Absolute difference between `a` and `b`. Sub-second remainders are dropped.
#[must_use]
pub fn date_diff(a: NaiveDateTime, b: NaiveDateTime) -> DateDiff {
    let total = (a - b).num_seconds().abs();
    DateDiff {
        days: total / SECONDS_PER_DAY,
        hours: total % SECONDS_PER_DAY / 3600,
        minutes: total % 3600 / 60,
        seconds: total % 60,
    }
}

/// Gregorian leap year test for the year of `date`.
#[must_use]
pub fn is_leap_year<T: Datelike>(date: &T) -> bool {
    let year = date.year();
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the month containing `date`.
#[must_use]
pub fn days_in_month<T: Datelike>(date: &T) -> u32 {
    match date.month() {
        2 if is_leap_year(date) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Shifts `date` by a (possibly negative) number of days.
pub fn add_days(date: NaiveDateTime, days: i64) -> Result<NaiveDateTime> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| {
            Error::out_of_range("add_days", days, "result is outside the supported date range")
        })
}

/// Every date from `start` to `end` inclusive, one day apart.
///
/// Each element keeps the time of day of `start`; the sequence stops at the
/// last value not after `end`. Empty when `start > end`.
#[must_use]
pub fn dates_between(start: NaiveDateTime, end: NaiveDateTime) -> Vec<NaiveDateTime> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.checked_add_signed(Duration::days(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Whether `a` and `b` fall on the same calendar date.
#[must_use]
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Midnight on the given date, if it exists.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            Error::invalid_input("date", format!("{year:04}-{month:02}-{day:02} is not a valid date"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_format_tokens() {
        let value = dt(2023, 1, 1, 14, 30, 0);
        assert_eq!(format(&value, "YYYY-MM-DD HH:mm:ss"), "2023-01-01 14:30:00");
        assert_eq!(format(&value, "DD/MM/YYYY"), "01/01/2023");
        assert_eq!(format(&value, "no tokens"), "no tokens");
    }

    #[test]
    fn test_date_diff() {
        let diff = date_diff(dt(2023, 1, 1, 0, 0, 0), dt(2023, 1, 5, 12, 30, 45));
        assert_eq!(
            diff,
            DateDiff {
                days: 4,
                hours: 12,
                minutes: 30,
                seconds: 45
            }
        );
        assert_eq!(
            date_diff(dt(2023, 1, 5, 12, 30, 45), dt(2023, 1, 1, 0, 0, 0)),
            diff
        );
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(&dt(2020, 1, 1, 0, 0, 0)));
        assert!(!is_leap_year(&dt(2021, 1, 1, 0, 0, 0)));
        assert!(!is_leap_year(&dt(1900, 1, 1, 0, 0, 0)));
        assert!(is_leap_year(&dt(2000, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(&dt(2023, 2, 1, 0, 0, 0)), 28);
        assert_eq!(days_in_month(&dt(2024, 2, 10, 0, 0, 0)), 29);
        assert_eq!(days_in_month(&dt(2023, 1, 1, 0, 0, 0)), 31);
        assert_eq!(days_in_month(&dt(2023, 4, 30, 0, 0, 0)), 30);
    }

    #[test]
    fn test_add_days() {
        let start = dt(2023, 1, 1, 8, 0, 0);
        assert_eq!(add_days(start, 5).unwrap(), dt(2023, 1, 6, 8, 0, 0));
        assert_eq!(add_days(start, -1).unwrap(), dt(2022, 12, 31, 8, 0, 0));
        assert!(add_days(start, i64::MAX / 2).is_err());
    }

    #[test]
    fn test_dates_between() {
        let days = dates_between(dt(2023, 1, 1, 0, 0, 0), dt(2023, 1, 5, 0, 0, 0));
        assert_eq!(days.len(), 5);
        assert_eq!(days[4], dt(2023, 1, 5, 0, 0, 0));
        assert!(dates_between(dt(2023, 1, 5, 0, 0, 0), dt(2023, 1, 1, 0, 0, 0)).is_empty());
        assert_eq!(
            dates_between(dt(2023, 1, 1, 12, 0, 0), dt(2023, 1, 3, 6, 0, 0)).len(),
            2
        );
    }

    #[test]
    fn test_is_same_day() {
        assert!(is_same_day(&dt(2023, 1, 1, 10, 30, 0), &dt(2023, 1, 1, 15, 45, 0)));
        assert!(!is_same_day(&dt(2023, 1, 1, 10, 30, 0), &dt(2023, 1, 2, 0, 0, 0)));
    }

    #[test]
    fn test_date_constructor() {
        assert_eq!(date(2024, 2, 29).unwrap(), dt(2024, 2, 29, 0, 0, 0));
        assert!(date(2023, 2, 29).is_err());
    }
}
