//! An accessible date input, independent of any UI framework.
//!
//! A [`DateInput`] tracks a day, month, year and time of day, selected through
//! separate controls, plus a set of allowed weekdays ([`DayConstraints`]).
//! Whenever the month, year or constraints change, the selected day is checked
//! against the days still available and moved to the nearest one if needed.
//! Every accepted change emits a [`DateChanged`] with the assembled date, or
//! `None` while the selection is incomplete.
//!
//! [`DateRangeInput`] pairs two independent inputs into a start/end range.
//!
//! The derivations ([`available_days`], [`build_date`]) are plain functions of
//! the state, so a host framework can call them from its own update cycle.
//!
//! ```
//! use date_input::{DateInput, DateInputConfig, DayConstraints};
//!
//! let mut input = DateInput::new(DateInputConfig::default().default_year(2024));
//! input.set_month(Some(2)); // March
//! input.set_day(Some(2)); // a Saturday
//!
//! // Only Monday, Wednesday and Friday from now on:
//! let changed = input.set_constraints(DayConstraints::from_indices([1, 3, 5]));
//! assert_eq!(input.selection().day, Some(1));
//! assert!(changed.is_some());
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod announcer;
pub mod calendar;
mod config;
mod constraints;
mod emitter;
mod error;
mod input;
pub mod locale;
mod range;
mod reconcile;
mod selection;

pub use crate::{
    announcer::{ANNOUNCEMENT_DURATION, Announcer, RELOCATION_MESSAGE},
    config::{DateInputConfig, DateRangeConfig, current_year},
    constraints::DayConstraints,
    emitter::{ChangeEmitter, DateChanged, DateValue, ListenerId, RangeChanged, build_date},
    error::{InputError, parse_hour, parse_minute, parse_year},
    input::DateInput,
    range::DateRangeInput,
    reconcile::{
        MAX_DAYS_IN_MONTH, Relocation, available_days, closest_available_day,
        days_in_selected_month, relocate_if_invalid,
    },
    selection::SelectionState,
};

pub use chrono;
