// src/gui/components/tabs.rs
//
// Leaderboard tabs. Clicking a tab always issues a fresh load, including the
// active one (acts as reload). Search + sort for each board are kept.

use eframe::egui;

use crate::{boards::BOARDS, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.active();
        let mut picked = None;

        for board in BOARDS.iter() {
            let selected = board.id == cur;
            let resp = ui
                .selectable_label(selected, board.label)
                .on_hover_text(board.resource);
            if resp.clicked() {
                picked = Some(board.id);
            }
        }

        if let Some(next) = picked {
            logf!("UI: Tab {} → {}", cur, next);
            app.select_board(next);
        }
    });
}
