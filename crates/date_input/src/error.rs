use std::num::ParseIntError;

/// Why a piece of user input was dropped.
///
/// These never escape the [`crate::DateInput`] handlers, which log and ignore them,
/// but the parsing helpers expose them for hosts that want to show validation hints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{text:?} is not a whole number")]
    NotANumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("year {year} is outside {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("month index {0} is outside 0..=11")]
    MonthOutOfRange(u32),

    #[error("day {day} is outside 1..={days_in_month}")]
    DayOutOfRange { day: u32, days_in_month: u32 },

    #[error("day {0} falls on an excluded weekday")]
    DayUnavailable(u32),

    #[error("hour {0} is outside 0..=23")]
    HourOutOfRange(u32),

    #[error("minute {0} is outside 0..=59")]
    MinuteOutOfRange(u32),

    #[error("unknown locale {0:?}")]
    UnknownLocale(String),
}

fn parse_number<T: std::str::FromStr<Err = ParseIntError>>(text: &str) -> Result<T, InputError> {
    text.trim()
        .parse()
        .map_err(|source| InputError::NotANumber {
            text: text.to_owned(),
            source,
        })
}

/// Parse typed year text and check it against the configured bounds.
pub fn parse_year(text: &str, min: i32, max: i32) -> Result<i32, InputError> {
    let year = parse_number(text)?;
    check_year(year, min, max)
}

pub fn check_year(year: i32, min: i32, max: i32) -> Result<i32, InputError> {
    if (min..=max).contains(&year) {
        Ok(year)
    } else {
        Err(InputError::YearOutOfRange { year, min, max })
    }
}

/// Parse typed hour text (`0..=23`).
pub fn parse_hour(text: &str) -> Result<u32, InputError> {
    check_hour(parse_number(text)?)
}

pub fn check_hour(hour: u32) -> Result<u32, InputError> {
    if hour <= 23 {
        Ok(hour)
    } else {
        Err(InputError::HourOutOfRange(hour))
    }
}

/// Parse typed minute text (`0..=59`).
pub fn parse_minute(text: &str) -> Result<u32, InputError> {
    check_minute(parse_number(text)?)
}

pub fn check_minute(minute: u32) -> Result<u32, InputError> {
    if minute <= 59 {
        Ok(minute)
    } else {
        Err(InputError::MinuteOutOfRange(minute))
    }
}

pub fn check_month(month: u32) -> Result<u32, InputError> {
    if month <= 11 {
        Ok(month)
    } else {
        Err(InputError::MonthOutOfRange(month))
    }
}
