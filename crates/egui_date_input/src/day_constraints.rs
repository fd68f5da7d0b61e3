use date_input::{DateInput, calendar::WEEKDAYS_FROM_SUNDAY};
use egui::Ui;

use crate::fields::{FieldAction, LocaleNames};

/// One checkbox per weekday, Sunday first.
pub(crate) fn show(ui: &mut Ui, input: &DateInput, names: &LocaleNames) -> Option<FieldAction> {
    let constraints = input.constraints();
    let mut action = None;

    ui.label("Constrain by day of week");
    ui.horizontal_wrapped(|ui| {
        for (index, weekday) in WEEKDAYS_FROM_SUNDAY.into_iter().enumerate() {
            let name = names
                .weekdays
                .get(index)
                .cloned()
                .unwrap_or_else(|| weekday.to_string());
            let mut checked = constraints.contains(weekday);
            if ui.checkbox(&mut checked, name).changed() {
                action = Some(FieldAction::Weekday(weekday, checked));
            }
        }
    });

    action
}
