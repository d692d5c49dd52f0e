// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use peloton_board::{
    config::{
        consts::{APP_TITLE, WINDOW_H, WINDOW_W},
        options::{AppOptions, DataLocation},
    },
    gui,
    log::{self, LogTarget},
};

fn main() {
    log::init(LogTarget::default());

    // Optional single argument: data directory or base URL.
    let mut options = AppOptions::default();
    if let Some(arg) = std::env::args().nth(1) {
        options.source.location = DataLocation::parse(&arg);
    }

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
