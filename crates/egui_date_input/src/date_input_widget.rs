use date_input::{DateInput, DateInputConfig, DateValue};
use egui::{Response, Ui, Widget};
use web_time::Instant;

use crate::fields::{self, FieldsState};

/// Kept in egui memory between frames.
#[derive(Clone, Debug)]
struct DateInputMemory {
    input: DateInput,

    /// The value last received from or written to the caller.
    last_value: Option<DateValue>,

    fields: FieldsState,
}

impl DateInputMemory {
    fn new(config: DateInputConfig, value: Option<DateValue>) -> Self {
        Self {
            input: DateInput::with_value(config, value),
            last_value: value,
            fields: FieldsState::default(),
        }
    }

    /// Pick up configuration changes and values set by the caller.
    fn sync(&mut self, config: &DateInputConfig, value: Option<DateValue>) {
        if self.input.config() != config {
            self.input.set_config(config.clone());
        }
        if self.last_value != value {
            log::trace!("External value changed to {value:?}");
            self.input.set_value(value);
            self.last_value = value;
        }
    }
}

/// Day, month and year selectors, an optional time picker and weekday constraints.
///
/// The response is marked as changed whenever a new date (or `None`) was
/// written to the value.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// # let mut date = None;
/// ui.add(egui_date_input::DateInputWidget::new(&mut date).id_salt("birthday").show_time(false));
/// # });
/// ```
pub struct DateInputWidget<'a> {
    value: &'a mut Option<DateValue>,
    id_salt: Option<&'a str>,
    config: DateInputConfig,
}

impl<'a> DateInputWidget<'a> {
    pub fn new(value: &'a mut Option<DateValue>) -> Self {
        Self {
            value,
            id_salt: None,
            config: DateInputConfig::default(),
        }
    }

    /// Add id source.
    /// Must be set if multiple date inputs are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: &'a str) -> Self {
        self.id_salt = Some(id_salt);
        self
    }

    /// Replace the whole configuration.
    #[inline]
    pub fn config(mut self, config: DateInputConfig) -> Self {
        self.config = config;
        self
    }

    /// Shown while the selection is incomplete. (Default: "Select a date")
    #[inline]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config = self.config.placeholder(placeholder);
        self
    }

    /// Accepted years. (Default: 1900..=2100)
    #[inline]
    pub fn year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.config = self.config.year_range(min_year, max_year);
        self
    }

    /// Year shown while nothing is selected. (Default: the current year)
    #[inline]
    pub fn default_year(mut self, default_year: i32) -> Self {
        self.config = self.config.default_year(default_year);
        self
    }

    /// Locale for month and weekday names, e.g. `fr-FR`. (Default: `en-US`)
    #[inline]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config = self.config.locale(locale);
        self
    }

    /// Show the hour and minute fields. (Default: true)
    #[inline]
    pub fn show_time(mut self, show_time: bool) -> Self {
        self.config = self.config.show_time(show_time);
        self
    }
}

impl Widget for DateInputWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        profiling::function_scope!();

        let id = ui.make_persistent_id(self.id_salt);
        let mut memory = ui
            .data_mut(|data| data.get_temp::<DateInputMemory>(id))
            .unwrap_or_else(|| DateInputMemory::new(self.config.clone(), *self.value));
        memory.sync(&self.config, *self.value);
        memory.input.clear_expired_announcement_at(Instant::now());

        let inner = ui.group(|ui| {
            ui.vertical(|ui| fields::show(ui, id, &memory.input, &mut memory.fields))
                .inner
        });
        let mut response = inner.response;

        if let Some(action) = inner.inner
            && let Some(changed) = action.apply(&mut memory.input)
        {
            *self.value = changed.date;
            memory.last_value = changed.date;
            response.mark_changed();
            ui.ctx().request_repaint();
        }

        ui.data_mut(|data| data.insert_temp(id, memory));
        response
    }
}
