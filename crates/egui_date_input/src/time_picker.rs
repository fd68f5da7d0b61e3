use date_input::DateInput;
use egui::{Id, TextEdit, Ui};

use crate::fields::{FieldAction, FieldText, sync_text};

/// Hour and minute fields, shown as two digits while not being edited.
pub(crate) fn show(
    ui: &mut Ui,
    id: Id,
    input: &DateInput,
    text: &mut FieldText,
) -> Option<FieldAction> {
    let selection = *input.selection();
    let mut action = None;

    ui.horizontal(|ui| {
        let hour_label = ui.label("Hour");
        let hour_id = id.with("hour");
        sync_text(ui, hour_id, &mut text.hour, || format!("{:02}", selection.hour));
        let hour = ui
            .add(TextEdit::singleline(&mut text.hour).id(hour_id).desired_width(24.0))
            .labelled_by(hour_label.id)
            .on_hover_text("Hour (0-23)");
        if hour.changed() {
            action = Some(FieldAction::Hour(text.hour.clone()));
        }

        let minute_label = ui.label("Minute");
        let minute_id = id.with("minute");
        sync_text(ui, minute_id, &mut text.minute, || {
            format!("{:02}", selection.minute)
        });
        let minute = ui
            .add(TextEdit::singleline(&mut text.minute).id(minute_id).desired_width(24.0))
            .labelled_by(minute_label.id)
            .on_hover_text("Minute (0-59)");
        if minute.changed() {
            action = Some(FieldAction::Minute(text.minute.clone()));
        }
    });

    action
}
