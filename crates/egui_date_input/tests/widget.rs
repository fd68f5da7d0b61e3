use date_input::{DateValue, chrono::NaiveDate};
use egui::{CentralPanel, Context, RawInput, accesskit::Role};
use egui_date_input::{DateInputWidget, DateRangeInputWidget};
use egui_kittest::{Harness, kittest::Queryable as _};

fn date(year: i32, month: u32, day: u32) -> DateValue {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid date")
}

#[test]
fn idle_frame_leaves_value_alone() {
    let ctx = Context::default();
    let mut value = Some(date(2024, 3, 2));
    for _ in 0..2 {
        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let response = ui.add(DateInputWidget::new(&mut value).id_salt("idle"));
                assert!(!response.changed());
                assert!(response.rect.width() > 0.0);
            });
        });
    }
    assert_eq!(value, Some(date(2024, 3, 2)));
}

#[test]
fn range_renders_both_ends() {
    let ctx = Context::default();
    let mut start = Some(date(2024, 1, 5));
    let mut end = Some(date(2024, 1, 1));
    let _ = ctx.run(RawInput::default(), |ctx| {
        CentralPanel::default().show(ctx, |ui| {
            let response = ui.add(DateRangeInputWidget::new(&mut start, &mut end));
            assert!(!response.changed());
        });
    });
    assert_eq!((start, end), (Some(date(2024, 1, 5)), Some(date(2024, 1, 1))));
}

#[test]
fn weekday_checkbox_relocates_the_selected_day() {
    let mut harness = Harness::new_ui_state(
        |ui, value: &mut Option<DateValue>| {
            ui.add(
                DateInputWidget::new(value)
                    .id_salt("constrained")
                    .show_time(false),
            );
        },
        Some(date(2024, 3, 2)),
    );

    harness.get_by_label("Monday").click();
    harness.run();

    assert_eq!(*harness.state(), Some(date(2024, 3, 4)));
}

#[test]
fn external_value_resets_the_selectors() {
    let mut harness = Harness::new_ui_state(
        |ui, value: &mut Option<DateValue>| {
            ui.add(DateInputWidget::new(value).show_time(false));
        },
        None,
    );
    harness.run();
    assert!(harness.query_by_label("Select a date").is_some());

    *harness.state_mut() = Some(date(2020, 12, 25));
    harness.run();
    assert!(harness.query_by_label("Friday 25 December 2020").is_some());
}

#[test]
fn every_control_has_an_accessible_name() {
    let mut harness = Harness::new_ui_state(
        |ui, value: &mut Option<DateValue>| {
            ui.add(DateInputWidget::new(value));
        },
        Some(date(2024, 3, 2)),
    );
    harness.run();

    harness.get_by_role_and_label(Role::ComboBox, "Day");
    harness.get_by_role_and_label(Role::ComboBox, "Month");
    for field in ["Year", "Hour", "Minute"] {
        harness.get_by_role_and_label(Role::TextInput, field);
    }
}
