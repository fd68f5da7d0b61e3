use chrono::Weekday;
use web_time::Instant;

use crate::{
    Announcer, ChangeEmitter, DateChanged, DateInputConfig, DateValue, DayConstraints, InputError,
    ListenerId, Relocation, SelectionState, announcer::RELOCATION_MESSAGE, build_date, error,
    locale, reconcile,
};

/// One date input: the selector state, its weekday constraints and its observers.
///
/// All changes go through the handler methods, which mirror the controls of
/// the widget (day, month and year selectors, hour and minute fields, weekday
/// checkboxes). A handler that accepts its input publishes exactly one
/// [`DateChanged`] to the subscribed listeners and also returns it. Rejected
/// input changes nothing and returns `None`.
///
/// A clone keeps notifying the listeners subscribed to the original.
#[derive(Clone, Debug)]
pub struct DateInput {
    config: DateInputConfig,
    selection: SelectionState,
    constraints: DayConstraints,
    announcer: Announcer,
    emitter: ChangeEmitter<DateChanged>,
}

impl Default for DateInput {
    fn default() -> Self {
        Self::new(DateInputConfig::default())
    }
}

impl DateInput {
    pub fn new(config: DateInputConfig) -> Self {
        Self::with_value(config, None)
    }

    pub fn with_value(config: DateInputConfig, value: Option<DateValue>) -> Self {
        let selection = SelectionState::from_value(value, config.default_year);
        Self {
            config,
            selection,
            constraints: DayConstraints::NONE,
            announcer: Announcer::default(),
            emitter: ChangeEmitter::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &DateInputConfig {
        &self.config
    }

    /// Replace the configuration. The selection is kept as is.
    pub fn set_config(&mut self, config: DateInputConfig) {
        self.config = config;
    }

    #[inline]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[inline]
    pub fn constraints(&self) -> DayConstraints {
        self.constraints
    }

    #[inline]
    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    /// Empty the announcement slot once its message has expired.
    pub fn clear_expired_announcement_at(&mut self, now: Instant) {
        self.announcer.clear_expired_at(now);
    }

    /// The live announcement, if one is showing right now.
    pub fn announcement(&self) -> Option<&str> {
        self.announcer.announcement()
    }

    /// Call `listener` with every emitted change.
    pub fn on_change(
        &mut self,
        listener: impl Fn(&DateChanged) + Send + Sync + 'static,
    ) -> ListenerId {
        self.emitter.subscribe(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.emitter.unsubscribe(id)
    }

    /// Reset the selectors from an external value. Nothing is emitted.
    pub fn set_value(&mut self, value: Option<DateValue>) {
        self.selection = SelectionState::from_value(value, self.config.default_year);
    }

    /// The date the current selection describes.
    pub fn value(&self) -> Option<DateValue> {
        build_date(&self.selection, self.config.show_time)
    }

    pub fn days_in_month(&self) -> u32 {
        reconcile::days_in_selected_month(&self.selection, self.config.default_year)
    }

    /// Days the day selector offers as enabled, ascending.
    pub fn available_days(&self) -> Vec<u32> {
        reconcile::available_days(&self.selection, self.constraints, self.config.default_year)
    }

    /// The year the year field shows.
    pub fn display_year(&self) -> i32 {
        self.selection.year.unwrap_or(self.config.default_year)
    }

    /// The selected date in the configured locale, or the placeholder.
    pub fn summary(&self) -> String {
        match self.value() {
            Some(value) => locale::format_date(value, &self.config.locale, self.config.show_time),
            None => self.config.placeholder.clone(),
        }
    }

    // ------------------------------------------------------------------------
    // Handlers

    pub fn set_day(&mut self, day: Option<u32>) -> Option<DateChanged> {
        if let Some(day) = day
            && let Err(err) = self.check_day(day)
        {
            return rejected("day", &err);
        }
        self.selection.day = day;
        Some(self.emit())
    }

    /// Select a zero based month, or clear it with `None`.
    ///
    /// A day beyond the end of the new month is clamped to its last day before
    /// the weekday constraints are applied.
    pub fn set_month(&mut self, month: Option<u32>) -> Option<DateChanged> {
        if let Some(month) = month
            && let Err(err) = error::check_month(month)
        {
            return rejected("month", &err);
        }
        self.selection.month = month;

        if let (Some(day), Some(_)) = (self.selection.day, self.selection.month) {
            let days_in_month = self.days_in_month();
            if day > days_in_month {
                self.selection.day = Some(days_in_month);
            }
        }

        self.reconcile();
        Some(self.emit())
    }

    pub fn set_year(&mut self, year: i32) -> Option<DateChanged> {
        match error::check_year(year, self.config.min_year, self.config.max_year) {
            Ok(year) => self.apply_year(year),
            Err(err) => rejected("year", &err),
        }
    }

    /// Typed text from the year field.
    pub fn input_year(&mut self, text: &str) -> Option<DateChanged> {
        match error::parse_year(text, self.config.min_year, self.config.max_year) {
            Ok(year) => self.apply_year(year),
            Err(err) => rejected("year", &err),
        }
    }

    pub fn set_time(&mut self, hour: u32, minute: u32) -> Option<DateChanged> {
        let checked = error::check_hour(hour)
            .and_then(|hour| error::check_minute(minute).map(|minute| (hour, minute)));
        match checked {
            Ok((hour, minute)) => self.apply_time(hour, minute),
            Err(err) => rejected("time", &err),
        }
    }

    /// Typed text from the hour field. The minute is kept.
    pub fn input_hour(&mut self, text: &str) -> Option<DateChanged> {
        match error::parse_hour(text) {
            Ok(hour) => self.apply_time(hour, self.selection.minute),
            Err(err) => rejected("hour", &err),
        }
    }

    /// Typed text from the minute field. The hour is kept.
    pub fn input_minute(&mut self, text: &str) -> Option<DateChanged> {
        match error::parse_minute(text) {
            Ok(minute) => self.apply_time(self.selection.hour, minute),
            Err(err) => rejected("minute", &err),
        }
    }

    /// Replace the weekday constraints.
    ///
    /// Emits only if the selected day had to be moved.
    pub fn set_constraints(&mut self, constraints: DayConstraints) -> Option<DateChanged> {
        self.constraints = constraints;
        self.relocate_if_invalid()
    }

    /// A weekday checkbox was switched to `checked`.
    pub fn toggle_weekday(&mut self, weekday: Weekday, checked: bool) -> Option<DateChanged> {
        self.set_constraints(self.constraints.toggled(weekday, checked))
    }

    /// Move an unavailable selected day to the nearest available day.
    ///
    /// Emits (and announces) only when the day was moved.
    pub fn relocate_if_invalid(&mut self) -> Option<DateChanged> {
        match self.reconcile() {
            Relocation::Moved { .. } => Some(self.emit()),
            Relocation::Unchanged | Relocation::Cleared { .. } => None,
        }
    }

    // ------------------------------------------------------------------------

    fn check_day(&self, day: u32) -> Result<u32, InputError> {
        let days_in_month = self.days_in_month();
        if day == 0 || day > days_in_month {
            Err(InputError::DayOutOfRange { day, days_in_month })
        } else if !self.available_days().contains(&day) {
            Err(InputError::DayUnavailable(day))
        } else {
            Ok(day)
        }
    }

    fn apply_year(&mut self, year: i32) -> Option<DateChanged> {
        self.selection.year = Some(year);
        self.reconcile();
        Some(self.emit())
    }

    fn apply_time(&mut self, hour: u32, minute: u32) -> Option<DateChanged> {
        self.selection.hour = hour;
        self.selection.minute = minute;
        Some(self.emit())
    }

    fn reconcile(&mut self) -> Relocation {
        let relocation = reconcile::relocate_if_invalid(
            &mut self.selection,
            self.constraints,
            self.config.default_year,
        );
        match relocation {
            Relocation::Unchanged => {}
            Relocation::Moved { from, to } => {
                log::debug!("Moved day {from} to {to} to satisfy {:?}", self.constraints);
                self.announcer.announce(RELOCATION_MESSAGE);
            }
            Relocation::Cleared { from } => {
                log::debug!("No day left for {:?}, unset day {from}", self.constraints);
            }
        }
        relocation
    }

    fn emit(&self) -> DateChanged {
        let event = DateChanged { date: self.value() };
        log::trace!("Date changed: {:?}", event.date);
        self.emitter.emit(&event);
        event
    }
}

fn rejected(field: &str, err: &InputError) -> Option<DateChanged> {
    log::debug!("Ignoring {field} input: {err}");
    None
}
