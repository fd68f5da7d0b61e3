//! The controls of one date input, shared by the single and range widgets.
//!
//! The child displays only read the [`DateInput`] and report what the user did
//! as a [`FieldAction`]; the owning widget applies it.

use date_input::{DateChanged, DateInput, chrono::Weekday, locale};
use egui::{Id, RichText, Ui};
use web_time::Instant;

use crate::{day_constraints, selectors, time_picker};

/// Something the user did to one of the controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FieldAction {
    Day(Option<u32>),
    Month(Option<u32>),
    Year(String),
    Hour(String),
    Minute(String),
    Weekday(Weekday, bool),
}

impl FieldAction {
    pub fn apply(self, input: &mut DateInput) -> Option<DateChanged> {
        match self {
            Self::Day(day) => input.set_day(day),
            Self::Month(month) => input.set_month(month),
            Self::Year(text) => input.input_year(&text),
            Self::Hour(text) => input.input_hour(&text),
            Self::Minute(text) => input.input_minute(&text),
            Self::Weekday(weekday, checked) => input.toggle_weekday(weekday, checked),
        }
    }
}

/// Month and weekday names for one locale, recomputed when the locale changes.
#[derive(Clone, Debug, Default)]
pub(crate) struct LocaleNames {
    locale: String,
    pub months: Vec<String>,
    pub weekdays: Vec<String>,
}

impl LocaleNames {
    pub fn update(&mut self, locale: &str) {
        if self.locale != locale || self.months.is_empty() {
            self.locale = locale.to_owned();
            self.months = locale::month_names(locale);
            self.weekdays = locale::weekday_names(locale);
        }
    }
}

/// Text the user is typing into the numeric fields.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldText {
    pub year: String,
    pub hour: String,
    pub minute: String,
}

/// Everything a date input keeps in egui memory between frames.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldsState {
    pub text: FieldText,
    pub names: LocaleNames,
}

/// Show all controls of `input` and report at most one user action.
pub(crate) fn show(
    ui: &mut Ui,
    id: Id,
    input: &DateInput,
    state: &mut FieldsState,
) -> Option<FieldAction> {
    state.names.update(&input.config().locale);

    let summary = input.summary();
    if input.value().is_some() {
        ui.strong(summary);
    } else {
        ui.weak(summary);
    }

    let selector_action = selectors::show(
        ui,
        id.with("selectors"),
        input,
        &state.names,
        &mut state.text.year,
    );
    let time_action = if input.config().show_time {
        time_picker::show(ui, id.with("time"), input, &mut state.text)
    } else {
        None
    };
    let constraint_action = day_constraints::show(ui, input, &state.names);

    show_announcement(ui, input);

    // Only one control can be interacted with per frame.
    selector_action.or(time_action).or(constraint_action)
}

fn show_announcement(ui: &mut Ui, input: &DateInput) {
    let now = Instant::now();
    if let Some(message) = input.announcer().announcement_at(now) {
        ui.label(RichText::new(message).italics());
    }
    if let Some(remaining) = input.announcer().remaining_at(now) {
        ui.ctx().request_repaint_after(remaining);
    }
}

/// Keep a numeric field showing the model value unless the user is editing it.
pub(crate) fn sync_text(ui: &Ui, text_id: Id, text: &mut String, value: impl FnOnce() -> String) {
    if !ui.memory(|mem| mem.has_focus(text_id)) {
        *text = value();
    }
}
