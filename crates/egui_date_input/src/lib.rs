//! [`egui`] widgets for the [`date_input`] state machine.
//!
//! * [`DateInputWidget`]: day/month/year selectors, optional time fields and weekday constraints.
//! * [`DateRangeInputWidget`]: two independent date inputs for a start and an end.
//!
//! Both keep their selector state in egui memory and write the emitted date back
//! into the value you pass in, marking the [`egui::Response`] as changed.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod date_input_widget;
mod day_constraints;
mod fields;
mod range_input_widget;
mod selectors;
mod time_picker;

pub use crate::{date_input_widget::DateInputWidget, range_input_widget::DateRangeInputWidget};

pub use date_input;
