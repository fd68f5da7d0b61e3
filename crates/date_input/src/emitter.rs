use std::{fmt, sync::Arc};

use chrono::NaiveDateTime;

use crate::{SelectionState, calendar};

/// A concrete local calendar date and time. There is no timezone attached.
pub type DateValue = NaiveDateTime;

/// Assemble the selected fields into a date.
///
/// `None` unless day, month and year are all set. With `show_time` the selected
/// hour and minute are used, otherwise the time is midnight. An impossible
/// combination (which reconciliation should already prevent) also gives `None`.
pub fn build_date(selection: &SelectionState, show_time: bool) -> Option<DateValue> {
    let (Some(day), Some(month), Some(year)) = (selection.day, selection.month, selection.year)
    else {
        return None;
    };
    let date = calendar::date(year, month, day)?;
    if show_time {
        date.and_hms_opt(selection.hour, selection.minute, 0)
    } else {
        date.and_hms_opt(0, 0, 0)
    }
}

/// Published by a [`crate::DateInput`] whenever the user changes its selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateChanged {
    /// `None` while the selection is incomplete.
    pub date: Option<DateValue>,
}

/// Published by a [`crate::DateRangeInput`] whenever either end changes.
///
/// `start` may well be after `end`: the two ends are not validated against each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeChanged {
    pub start: Option<DateValue>,
    pub end: Option<DateValue>,
}

/// Handle returned by [`ChangeEmitter::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// A list of observers that are called synchronously, in subscription order.
pub struct ChangeEmitter<E> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<E>)>,
}

impl<E> ChangeEmitter<E> {
    pub fn subscribe(&mut self, listener: impl Fn(&E) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if there was no such listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != len_before
    }

    pub fn emit(&self, event: &E) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for ChangeEmitter<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

/// A clone notifies the same listeners as the original.
///
/// The two lists are independent afterwards: unsubscribing from one leaves the other alone.
impl<E> Clone for ChangeEmitter<E> {
    fn clone(&self) -> Self {
        Self {
            next_id: self.next_id,
            listeners: self.listeners.clone(),
        }
    }
}

impl<E> fmt::Debug for ChangeEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeEmitter")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
