//! Locale aware month and weekday names.
//!
//! Locale identifiers are BCP-47 style (`en-US`, `fr-FR`, or just `fr`) and are
//! mapped onto the glibc locale tables that `chrono` ships.

use chrono::{Locale, NaiveDateTime, TimeZone as _, Utc};

use crate::{InputError, calendar::WEEKDAYS_FROM_SUNDAY};

/// Used whenever a locale identifier is not recognized.
pub const FALLBACK_LOCALE: Locale = Locale::en_US;

/// Map an identifier like `fr-FR` or `fr` to a chrono [`Locale`].
pub fn resolve_locale(identifier: &str) -> Result<Locale, InputError> {
    let normalized = identifier.trim().replace('-', "_");
    let mut candidates = vec![normalized.clone()];
    if !normalized.contains('_') {
        // A bare language: try the territory of the same name, e.g. `fr_FR`, `de_DE`.
        candidates.push(format!(
            "{}_{}",
            normalized.to_lowercase(),
            normalized.to_uppercase()
        ));
    }

    candidates
        .iter()
        .find_map(|candidate| Locale::try_from(candidate.as_str()).ok())
        .ok_or_else(|| InputError::UnknownLocale(identifier.to_owned()))
}

/// Like [`resolve_locale`], but falls back to [`FALLBACK_LOCALE`].
pub fn locale_or_fallback(identifier: &str) -> Locale {
    resolve_locale(identifier).unwrap_or_else(|err| {
        log::warn!("{err}, using {FALLBACK_LOCALE:?}");
        FALLBACK_LOCALE
    })
}

fn format_at(year: i32, month: u32, day: u32, fmt: &str, locale: Locale) -> Option<String> {
    let time = Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()?;
    Some(time.format_localized(fmt, locale).to_string())
}

/// The twelve long month names, January first.
pub fn month_names(locale: &str) -> Vec<String> {
    let locale = locale_or_fallback(locale);
    (1..=12)
        .filter_map(|month| format_at(2000, month, 1, "%B", locale))
        .collect()
}

/// The seven long weekday names, Sunday first.
pub fn weekday_names(locale: &str) -> Vec<String> {
    let locale = locale_or_fallback(locale);
    // 2000-01-02 was a Sunday.
    (0..WEEKDAYS_FROM_SUNDAY.len() as u32)
        .filter_map(|offset| format_at(2000, 1, 2 + offset, "%A", locale))
        .collect()
}

/// A human readable rendition of `value`, e.g. `Friday 15 March 2024 14:30`.
pub fn format_date(value: NaiveDateTime, locale: &str, show_time: bool) -> String {
    let fmt = if show_time {
        "%A %-d %B %Y %H:%M"
    } else {
        "%A %-d %B %Y"
    };
    Utc.from_utc_datetime(&value)
        .format_localized(fmt, locale_or_fallback(locale))
        .to_string()
}
