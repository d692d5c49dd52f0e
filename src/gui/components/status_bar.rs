// src/gui/components/status_bar.rs

use eframe::egui::{self, Color32, RichText};

use crate::{gui::app::App, session::BoardData, view::summary_text};

const ERROR_RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        match app.session.data() {
            BoardData::Loading => {
                ui.spinner();
                ui.label("Loading...");
            }
            BoardData::Ready { records, error } => {
                // row_ix is the live projection; no need to re-project here.
                ui.label(summary_text(app.row_ix.len(), records.len()));
                if let Some(err) = error {
                    ui.separator();
                    ui.label(RichText::new(err).color(ERROR_RED));
                }
            }
        }

        if let Some(msg) = &app.notice {
            ui.separator();
            ui.label(msg);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(app.source.describe()).weak());
        });
    });
}
