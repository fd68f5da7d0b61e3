use chrono::Datelike as _;

/// The current year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Properties of a single date input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DateInputConfig {
    /// Shown instead of a date while the selection is incomplete.
    pub placeholder: String,

    /// Lowest year accepted from the year field.
    pub min_year: i32,

    /// Highest year accepted from the year field.
    pub max_year: i32,

    /// Year used while nothing is selected.
    pub default_year: i32,

    /// Locale identifier such as `en-US`, used for month and weekday names only.
    pub locale: String,

    /// Include hour and minute in the emitted date. Otherwise dates are at midnight.
    pub show_time: bool,
}

impl Default for DateInputConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select a date".to_owned(),
            min_year: 1900,
            max_year: 2100,
            default_year: current_year(),
            locale: "en-US".to_owned(),
            show_time: true,
        }
    }
}

impl DateInputConfig {
    #[inline]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Only accept years in `min_year..=max_year`. (Default: 1900..=2100)
    #[inline]
    pub fn year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// (Default: the current year)
    #[inline]
    pub fn default_year(mut self, default_year: i32) -> Self {
        self.default_year = default_year;
        self
    }

    /// (Default: `en-US`)
    #[inline]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// (Default: true)
    #[inline]
    pub fn show_time(mut self, show_time: bool) -> Self {
        self.show_time = show_time;
        self
    }
}

/// Properties shared by both ends of a date range input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DateRangeConfig {
    pub locale: String,
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for DateRangeConfig {
    fn default() -> Self {
        let single = DateInputConfig::default();
        Self {
            locale: single.locale,
            min_year: single.min_year,
            max_year: single.max_year,
        }
    }
}

impl DateRangeConfig {
    #[inline]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[inline]
    pub fn year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Configuration of each end. Everything not shared keeps its default.
    pub fn input_config(&self) -> DateInputConfig {
        DateInputConfig::default()
            .locale(self.locale.clone())
            .year_range(self.min_year, self.max_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DateInputConfig::default();
        assert_eq!(config.placeholder, "Select a date");
        assert_eq!((config.min_year, config.max_year), (1900, 2100));
        assert_eq!(config.default_year, current_year());
        assert_eq!(config.locale, "en-US");
        assert!(config.show_time);
    }

    #[test]
    fn range_config_passes_shared_fields_down() {
        let range = DateRangeConfig::default()
            .locale("fr-FR")
            .year_range(2000, 2030);
        let single = range.input_config();
        assert_eq!(single.locale, "fr-FR");
        assert_eq!((single.min_year, single.max_year), (2000, 2030));
        assert!(single.show_time);
    }
}
