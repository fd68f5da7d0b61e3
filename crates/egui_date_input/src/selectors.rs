use date_input::DateInput;
use egui::{ComboBox, Id, TextEdit, Ui};

use crate::fields::{FieldAction, LocaleNames, sync_text};

const UNSET: &str = "-";

/// Day, month and year selectors.
///
/// Days of the month that fall on an excluded weekday are listed but disabled.
pub(crate) fn show(
    ui: &mut Ui,
    id: Id,
    input: &DateInput,
    names: &LocaleNames,
    year_text: &mut String,
) -> Option<FieldAction> {
    let selection = *input.selection();
    let available = input.available_days();
    let mut action = None;

    ui.horizontal(|ui| {
        let mut day = selection.day;
        ComboBox::new(id.with("day"), "Day")
            .selected_text(day.map_or_else(|| UNSET.to_owned(), |day| day.to_string()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut day, None, UNSET);
                for candidate in 1..=input.days_in_month() {
                    ui.add_enabled_ui(available.contains(&candidate), |ui| {
                        ui.selectable_value(&mut day, Some(candidate), candidate.to_string());
                    });
                }
            });
        if day != selection.day {
            action = Some(FieldAction::Day(day));
        }

        let mut month = selection.month;
        let month_name = |month: Option<u32>| {
            month
                .and_then(|month| names.months.get(month as usize))
                .map_or(UNSET, String::as_str)
        };
        ComboBox::new(id.with("month"), "Month")
            .selected_text(month_name(month))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut month, None, UNSET);
                for (index, name) in names.months.iter().enumerate() {
                    ui.selectable_value(&mut month, Some(index as u32), name.as_str());
                }
            });
        if month != selection.month {
            action = Some(FieldAction::Month(month));
        }

        let label = ui.label("Year");
        let text_id = id.with("year");
        sync_text(ui, text_id, year_text, || input.display_year().to_string());
        let response = ui
            .add(TextEdit::singleline(year_text).id(text_id).desired_width(48.0))
            .labelled_by(label.id)
            .on_hover_text(format!(
                "{}..={}",
                input.config().min_year,
                input.config().max_year
            ));
        if response.changed() {
            action = Some(FieldAction::Year(year_text.clone()));
        }
    });

    action
}
