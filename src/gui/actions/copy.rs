// src/gui/actions/copy.rs
use eframe::egui;

use crate::{export, gui::app::App, view::View};

/// Copy what's on screen (filtered + sorted, header included).
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        app.set_notice("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let format = app.options.export;
    let txt = {
        let view = View::from_indices(app.session.data().records(), app.row_ix.clone());
        logf!("Copy: board={}, rows={}, format={:?}", app.active(), view.len(), format);
        export::to_export_string(&view, format)
    };

    let txt = match txt {
        Ok(txt) => txt,
        Err(e) => {
            loge!("Copy: export failed: {}", e);
            app.set_notice(format!("Copy failed: {e}"));
            return;
        }
    };

    ui_ctx.copy_text(txt);
    app.set_notice(format!("Copied {} row(s) as {}", app.row_ix.len(), format.ext().to_uppercase()));
}
