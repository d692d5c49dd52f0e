// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, mpsc::{self, Receiver, Sender}},
};

use eframe::egui;

use crate::{
    boards::BoardId,
    config::{
        consts::APP_TITLE,
        options::AppOptions,
    },
    session::{Applied, LoadRequest, LoadResponse, Session},
    source::{self, Fetch},
    view,
};

use super::actions;

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        native,
        Box::new(move |cc| Ok(Box::new(App::new(cc.egui_ctx.clone(), options)))),
    )?;
    Ok(())
}

pub struct App {
    pub options: AppOptions,

    // single source of truth for board/search/sort (UI thread only)
    pub session: Session,

    // where CSVs come from; shared with load workers
    pub source: Arc<dyn Fetch>,

    // workers → UI
    pub tx: Sender<LoadResponse>,
    pub rx: Receiver<LoadResponse>,

    // display order for the active board, rebuilt on data/search/sort change
    pub row_ix: Vec<usize>,

    // transient one-liner (copy feedback etc.)
    pub notice: Option<String>,

    pub egui_ctx: egui::Context,
}

impl App {
    pub fn new(egui_ctx: egui::Context, options: AppOptions) -> Self {
        let source: Arc<dyn Fetch> = Arc::from(source::from_options(&options.source));
        let (tx, rx) = mpsc::channel();

        let (session, first) = Session::start(BoardId::default());
        logf!("Init: data={}, board={}", source.describe(), session.active());

        let app = Self {
            options,
            session,
            source,
            tx,
            rx,
            row_ix: Vec::new(),
            notice: None,
            egui_ctx,
        };
        actions::load(&app, first);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn active(&self) -> BoardId { self.session.active() }

    #[inline]
    pub fn set_notice<T: Into<String>>(&mut self, msg: T) {
        self.notice = Some(msg.into());
    }

    /// Recompute display order from the session's records + view state.
    pub fn rebuild_view(&mut self) {
        let vs = self.session.view_state();
        self.row_ix = view::project(self.session.data().records(), &vs.search, &vs.sort);
    }

    /// Switch (or reload) the board. Clears rows immediately.
    pub fn select_board(&mut self, board: BoardId) {
        let req: LoadRequest = self.session.select(board);
        self.row_ix.clear();
        self.notice = None;
        actions::load(self, req);
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.session.view_state_mut().toggle_sort(key);
        let sort = &self.session.view_state().sort;
        logd!("UI: Sort {} → {} {:?}", self.active(), sort.key, sort.direction);
        self.rebuild_view();
    }

    /// Drain finished loads; only current ones change the view.
    fn poll_loads(&mut self) {
        while let Ok(resp) = self.rx.try_recv() {
            if self.session.apply(resp) == Applied::Accepted {
                self.rebuild_view();
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        egui::TopBottomPanel::top("boards").show(ctx, |ui| {
            super::components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            super::components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::search_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}
