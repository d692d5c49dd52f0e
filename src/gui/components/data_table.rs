// src/gui/components/data_table.rs
//
// Draws the live table for the active board: fixed leaderboard columns,
// rows in `app.row_ix` order. Header click toggles the sort.
// Purely a view; the only write-back is the clicked column.

use eframe::egui::{self, Align, CursorIcon, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::COLUMNS,
    gui::app::App,
    view::is_numeric_column,
};

fn preferred_width(col: &str) -> f32 {
    match col {
        "#" => 48.0,
        "Name" => 220.0,
        "Race Days" => 90.0,
        _ => 80.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.session.data().is_loading() {
        ui.centered_and_justified(|ui| {
            ui.label("Loading...");
        });
        return;
    }

    let mut clicked: Option<&'static str> = None;

    {
        let board = app.active();
        let sort = &app.session.view_state().sort;
        let records = app.session.data().records();
        let row_ix = &app.row_ix;

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .min_scrolled_height(0.0)
            .id_salt(("board_table", board));
        for col in COLUMNS {
            table = table.column(
                Column::initial(preferred_width(col)).resizable(true).clip(true).at_least(20.0),
            );
        }

        table
            .header(24.0, |mut header| {
                for col in COLUMNS {
                    header.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

                        let label = if sort.key == col {
                            format!("{col} {}", sort.direction.arrow())
                        } else {
                            s!(col)
                        };
                        let text = RichText::new(label).strong();
                        if is_numeric_column(col) {
                            ui.centered_and_justified(|ui| { ui.add(egui::Label::new(text).selectable(false)); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.add(egui::Label::new(text).selectable(false));
                            });
                        }

                        let id = ui.id().with("colhdr").with(col);
                        let resp = ui
                            .interact(ui.max_rect(), id, Sense::click())
                            .on_hover_cursor(CursorIcon::PointingHand);
                        if resp.clicked() {
                            clicked = Some(col);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, row_ix.len(), |mut row| {
                    let Some(rec) = row_ix.get(row.index()).and_then(|&ix| records.get(ix)) else {
                        return;
                    };
                    for col in COLUMNS {
                        let cell = rec.get(col).unwrap_or("");
                        row.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let mut rt = RichText::new(cell);
                            if col == "Name" {
                                rt = rt.strong();
                            } else if col == "Total" {
                                rt = rt.strong().size(14.5);
                            }
                            if is_numeric_column(col) {
                                ui.centered_and_justified(|ui| { ui.label(rt); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                            }
                        });
                    }
                });
            });
    }

    if let Some(col) = clicked {
        app.toggle_sort(col);
    }
}
