use date_input::{DateRangeConfig, DateRangeInput, DateValue, RangeChanged};
use egui::{Response, Ui, Widget};
use web_time::Instant;

use crate::fields::{self, FieldsState};

#[derive(Clone, Debug)]
struct RangeMemory {
    range: DateRangeInput,
    last: RangeChanged,
    start_fields: FieldsState,
    end_fields: FieldsState,
}

impl RangeMemory {
    fn new(config: DateRangeConfig, start: Option<DateValue>, end: Option<DateValue>) -> Self {
        Self {
            range: DateRangeInput::with_values(config, start, end),
            last: RangeChanged { start, end },
            start_fields: FieldsState::default(),
            end_fields: FieldsState::default(),
        }
    }
}

/// A start and an end [`crate::DateInputWidget`] side by side.
///
/// The two ends are independent: the start may be after the end.
pub struct DateRangeInputWidget<'a> {
    start: &'a mut Option<DateValue>,
    end: &'a mut Option<DateValue>,
    id_salt: Option<&'a str>,
    config: DateRangeConfig,
}

impl<'a> DateRangeInputWidget<'a> {
    pub fn new(start: &'a mut Option<DateValue>, end: &'a mut Option<DateValue>) -> Self {
        Self {
            start,
            end,
            id_salt: None,
            config: DateRangeConfig::default(),
        }
    }

    /// Add id source.
    /// Must be set if multiple range inputs are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: &'a str) -> Self {
        self.id_salt = Some(id_salt);
        self
    }

    #[inline]
    pub fn config(mut self, config: DateRangeConfig) -> Self {
        self.config = config;
        self
    }

    /// (Default: `en-US`)
    #[inline]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config = self.config.locale(locale);
        self
    }

    /// (Default: 1900..=2100)
    #[inline]
    pub fn year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.config = self.config.year_range(min_year, max_year);
        self
    }
}

impl Widget for DateRangeInputWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        profiling::function_scope!();

        let id = ui.make_persistent_id(self.id_salt);
        let external = RangeChanged {
            start: *self.start,
            end: *self.end,
        };
        let mut memory = ui
            .data_mut(|data| data.get_temp::<RangeMemory>(id))
            .filter(|memory| memory.range.config() == &self.config)
            .unwrap_or_else(|| RangeMemory::new(self.config.clone(), external.start, external.end));
        if memory.last.start != external.start {
            memory.range.set_start_value(external.start);
            memory.last.start = external.start;
        }
        if memory.last.end != external.end {
            memory.range.set_end_value(external.end);
            memory.last.end = external.end;
        }
        memory.range.clear_expired_announcements_at(Instant::now());

        let RangeMemory {
            range,
            start_fields,
            end_fields,
            ..
        } = &mut memory;

        let inner = ui.horizontal_top(|ui| {
            let start_action = ui
                .group(|ui| {
                    ui.vertical(|ui| {
                        ui.heading("Start Date");
                        fields::show(ui, id.with("start"), range.start(), start_fields)
                    })
                    .inner
                })
                .inner;
            let end_action = ui
                .group(|ui| {
                    ui.vertical(|ui| {
                        ui.heading("End Date");
                        fields::show(ui, id.with("end"), range.end(), end_fields)
                    })
                    .inner
                })
                .inner;
            (start_action, end_action)
        });
        let mut response = inner.response;

        let published = match inner.inner {
            (Some(action), _) => range.update_start(|start| action.apply(start)),
            (None, Some(action)) => range.update_end(|end| action.apply(end)),
            (None, None) => None,
        };
        if let Some(published) = published {
            *self.start = published.start;
            *self.end = published.end;
            memory.last = published;
            response.mark_changed();
            ui.ctx().request_repaint();
        }

        ui.data_mut(|data| data.insert_temp(id, memory));
        response
    }
}
