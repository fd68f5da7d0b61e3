use web_time::Instant;

use crate::{
    ChangeEmitter, DateChanged, DateInput, DateRangeConfig, DateValue, ListenerId, RangeChanged,
};

/// Two independent [`DateInput`]s presented as a start/end pair.
///
/// Whenever one end emits, the pair is republished as a [`RangeChanged`] with
/// the new value for that end and the last known value of the other. The ends
/// share no state and are never checked against each other.
#[derive(Clone, Debug)]
pub struct DateRangeInput {
    config: DateRangeConfig,
    start: DateInput,
    end: DateInput,
    range: RangeChanged,
    emitter: ChangeEmitter<RangeChanged>,
}

impl Default for DateRangeInput {
    fn default() -> Self {
        Self::new(DateRangeConfig::default())
    }
}

impl DateRangeInput {
    pub fn new(config: DateRangeConfig) -> Self {
        Self::with_values(config, None, None)
    }

    pub fn with_values(
        config: DateRangeConfig,
        start: Option<DateValue>,
        end: Option<DateValue>,
    ) -> Self {
        let input_config = config.input_config();
        Self {
            start: DateInput::with_value(input_config.clone(), start),
            end: DateInput::with_value(input_config, end),
            config,
            range: RangeChanged { start, end },
            emitter: ChangeEmitter::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &DateRangeConfig {
        &self.config
    }

    #[inline]
    pub fn start(&self) -> &DateInput {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &DateInput {
        &self.end
    }

    /// The last published (or externally supplied) pair.
    #[inline]
    pub fn range(&self) -> RangeChanged {
        self.range
    }

    pub fn on_change(
        &mut self,
        listener: impl Fn(&RangeChanged) + Send + Sync + 'static,
    ) -> ListenerId {
        self.emitter.subscribe(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.emitter.unsubscribe(id)
    }

    /// Reset both ends from external values. Nothing is emitted.
    pub fn set_values(&mut self, start: Option<DateValue>, end: Option<DateValue>) {
        self.set_start_value(start);
        self.set_end_value(end);
    }

    /// Reset the start from an external value. The end keeps its selection.
    pub fn set_start_value(&mut self, start: Option<DateValue>) {
        self.start.set_value(start);
        self.range.start = start;
    }

    /// Reset the end from an external value. The start keeps its selection.
    pub fn set_end_value(&mut self, end: Option<DateValue>) {
        self.end.set_value(end);
        self.range.end = end;
    }

    /// Drop expired announcements on both ends.
    pub fn clear_expired_announcements_at(&mut self, now: Instant) {
        self.start.clear_expired_announcement_at(now);
        self.end.clear_expired_announcement_at(now);
    }

    /// Run a handler on the start input and republish if it emitted.
    pub fn update_start(
        &mut self,
        handler: impl FnOnce(&mut DateInput) -> Option<DateChanged>,
    ) -> Option<RangeChanged> {
        let DateChanged { date } = handler(&mut self.start)?;
        Some(self.publish(RangeChanged {
            start: date,
            end: self.range.end,
        }))
    }

    /// Run a handler on the end input and republish if it emitted.
    pub fn update_end(
        &mut self,
        handler: impl FnOnce(&mut DateInput) -> Option<DateChanged>,
    ) -> Option<RangeChanged> {
        let DateChanged { date } = handler(&mut self.end)?;
        Some(self.publish(RangeChanged {
            start: self.range.start,
            end: date,
        }))
    }

    fn publish(&mut self, range: RangeChanged) -> RangeChanged {
        self.range = range;
        self.emitter.emit(&range);
        range
    }
}
