use chrono::{Datelike as _, Timelike as _};

use crate::DateValue;

/// The fields one date input is currently tracking.
///
/// `month` is zero based (`0` = January).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SelectionState {
    /// `1..=31`
    pub day: Option<u32>,

    /// `0..=11`
    pub month: Option<u32>,

    pub year: Option<i32>,

    /// `0..=23`
    pub hour: u32,

    /// `0..=59`
    pub minute: u32,
}

impl SelectionState {
    /// Decompose an external value into selector fields.
    ///
    /// Without a value, day and month are cleared, the year falls back to
    /// `default_year` and the time resets to midnight.
    pub fn from_value(value: Option<DateValue>, default_year: i32) -> Self {
        match value {
            Some(value) => Self {
                day: Some(value.day()),
                month: Some(value.month0()),
                year: Some(value.year()),
                hour: value.hour(),
                minute: value.minute(),
            },
            None => Self {
                day: None,
                month: None,
                year: Some(default_year),
                hour: 0,
                minute: 0,
            },
        }
    }

    /// Day, month and year are all set.
    pub fn is_complete(&self) -> bool {
        self.day.is_some() && self.month.is_some() && self.year.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn from_value_decomposes_local_fields() {
        let value = NaiveDate::from_ymd_opt(2024, 3, 15)
            .and_then(|date| date.and_hms_opt(14, 30, 59))
            .expect("valid date");

        let selection = SelectionState::from_value(Some(value), 1999);
        assert_eq!(
            selection,
            SelectionState {
                day: Some(15),
                month: Some(2),
                year: Some(2024),
                hour: 14,
                minute: 30,
            }
        );
        assert!(selection.is_complete());
    }

    #[test]
    fn from_nothing_uses_default_year() {
        let selection = SelectionState::from_value(None, 1999);
        assert_eq!(
            selection,
            SelectionState {
                day: None,
                month: None,
                year: Some(1999),
                hour: 0,
                minute: 0,
            }
        );
        assert!(!selection.is_complete());
    }
}
