// src/gui/components/search_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut changed = false;
    let mut copy_clicked = false;

    ui.horizontal(|ui| {
        ui.label("🔍");

        let copy_w = 60.0;
        let search = &mut app.session.view_state_mut().search;
        let edit = egui::TextEdit::singleline(search)
            .hint_text("Search by name or ARR...")
            .desired_width((ui.available_width() - copy_w).max(120.0));
        changed = ui.add(edit).changed();

        copy_clicked = ui
            .add_enabled(!app.row_ix.is_empty(), egui::Button::new("Copy"))
            .on_hover_text("Copy visible rows to the clipboard")
            .clicked();
    });

    if changed {
        logd!("UI: Search {} → {:?}", app.active(), app.session.view_state().search);
        app.rebuild_view();
    }
    if copy_clicked {
        let ctx = ui.ctx().clone();
        actions::copy(app, &ctx);
    }
}
