#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)] // it's an example

use eframe::egui;
use egui_date_input::{
    DateInputWidget, DateRangeInputWidget,
    date_input::{DateValue, locale::format_date},
};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 900.0]),
        ..Default::default()
    };

    let mut state = DemoState::default();

    eframe::run_simple_native("Date input demo", options, move |ctx, _frame| {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| state.ui(ui));
        });
    })
}

#[derive(Default)]
struct DemoState {
    date: Option<DateValue>,
    date_with_time: Option<DateValue>,
    range_start: Option<DateValue>,
    range_end: Option<DateValue>,
    french: Option<DateValue>,
}

impl DemoState {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Date input demo");
        ui.separator();

        card(ui, "Basic date picker with day constraints", |ui| {
            let response = ui.add(
                DateInputWidget::new(&mut self.date)
                    .id_salt("basic")
                    .show_time(false),
            );
            if response.changed() {
                log::info!("Date changed: {:?}", self.date);
            }
            selected(ui, "Selected", self.date, false);
        });

        card(ui, "Date picker with time", |ui| {
            let response =
                ui.add(DateInputWidget::new(&mut self.date_with_time).id_salt("with_time"));
            if response.changed() {
                log::info!("Date with time changed: {:?}", self.date_with_time);
            }
            selected(ui, "Selected", self.date_with_time, true);
        });

        card(ui, "Date range picker", |ui| {
            let response = ui.add(
                DateRangeInputWidget::new(&mut self.range_start, &mut self.range_end)
                    .id_salt("range"),
            );
            if response.changed() {
                log::info!("Range changed: {:?} - {:?}", self.range_start, self.range_end);
            }
            selected(ui, "Start", self.range_start, false);
            selected(ui, "End", self.range_end, false);
        });

        card(ui, "French locale (fr-FR)", |ui| {
            ui.add(
                DateInputWidget::new(&mut self.french)
                    .id_salt("french")
                    .locale("fr-FR")
                    .placeholder("Choisir une date"),
            );
        });
    }
}

fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.add_space(8.0);
    ui.strong(title);
    add_contents(ui);
    ui.add_space(8.0);
    ui.separator();
}

fn selected(ui: &mut egui::Ui, label: &str, value: Option<DateValue>, show_time: bool) {
    let text = value.map_or_else(
        || "Not selected".to_owned(),
        |value| format_date(value, "en-US", show_time),
    );
    ui.label(format!("{label}: {text}"));
}
