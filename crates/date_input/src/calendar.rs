//! Proleptic Gregorian calendar helpers on top of [`chrono::NaiveDate`].
//!
//! Months are zero based everywhere in this crate (`0` = January), matching the
//! indices of the month selector. Weekdays are indexed from Sunday (`0`) to
//! Saturday (`6`).

use chrono::{Datelike as _, NaiveDate, Weekday};

/// Weekdays in index order, Sunday first.
pub const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// The calendar date for a zero based `month`, or `None` if it does not exist.
pub fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.checked_add(1)?, day)
}

/// Number of days in the given month, including Feb 29 in leap years.
///
/// Returns `None` for a month outside `0..=11` or a year chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = date(year, month, 1)?;
    Some(
        first
            .with_day(31)
            .map(|_| 31)
            .or_else(|| first.with_day(30).map(|_| 30))
            .or_else(|| first.with_day(29).map(|_| 29))
            .unwrap_or(28),
    )
}

/// Weekday of the given date, or `None` if the date does not exist.
pub fn weekday_of(year: i32, month: u32, day: u32) -> Option<Weekday> {
    date(year, month, day).map(|date| date.weekday())
}

/// `true` if `(year, month, day)` names an existing calendar date.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    date(year, month, day).is_some()
}

/// Sunday based index (`0..=6`) of a weekday.
#[inline]
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Weekday for a Sunday based index, `None` above `6`.
#[inline]
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    WEEKDAYS_FROM_SUNDAY.get(usize::from(index)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 0), Some(31));
        assert_eq!(days_in_month(2023, 1), Some(28));
        assert_eq!(days_in_month(2024, 1), Some(29));
        assert_eq!(days_in_month(1900, 1), Some(28), "1900 is not a leap year");
        assert_eq!(days_in_month(2000, 1), Some(29), "2000 is a leap year");
        assert_eq!(days_in_month(2024, 3), Some(30));
        assert_eq!(days_in_month(2024, 11), Some(31));
        assert_eq!(days_in_month(2024, 12), None);
    }

    #[test]
    fn weekdays() {
        assert_eq!(weekday_of(2024, 2, 1), Some(Weekday::Fri));
        assert_eq!(weekday_of(2024, 2, 2), Some(Weekday::Sat));
        assert_eq!(weekday_of(2023, 1, 29), None);

        for (index, weekday) in WEEKDAYS_FROM_SUNDAY.iter().enumerate() {
            assert_eq!(usize::from(weekday_index(*weekday)), index);
            assert_eq!(weekday_from_index(index as u8), Some(*weekday));
        }
        assert_eq!(weekday_from_index(7), None);
    }

    #[test]
    fn validity() {
        assert!(is_valid_date(2024, 1, 29));
        assert!(!is_valid_date(2023, 1, 29));
        assert!(!is_valid_date(2024, 3, 31));
        assert!(!is_valid_date(2024, 0, 0));
    }
}
