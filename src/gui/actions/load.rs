// src/gui/actions/load.rs
use std::{sync::Arc, thread};

use crate::{
    gui::app::App,
    loader,
    session::{LoadRequest, LoadResponse},
};

/// Run one load on a worker thread. The response goes back over the app's
/// channel tagged with the request's board + ticket; `Session::apply`
/// decides whether it still matters.
pub fn load(app: &App, req: LoadRequest) {
    logf!("Load: begin board={} ticket={} resource={}", req.board, req.ticket, req.resource());

    let source = Arc::clone(&app.source);
    let tx = app.tx.clone();
    let ctx = app.egui_ctx.clone();

    let spawned = thread::Builder::new()
        .name(format!("load-{}-{}", req.board, req.ticket))
        .spawn(move || {
            let result = loader::load(source.as_ref(), req.resource());
            // Receiver gone means the window closed.
            let _ = tx.send(LoadResponse::new(req, result));
            ctx.request_repaint();
        });

    if let Err(e) = spawned {
        // No worker: load inline so the board doesn't stay in Loading forever.
        loge!("Load: could not spawn worker for {} ({}); loading inline", req.board, e);
        let result = loader::load(app.source.as_ref(), req.resource());
        let _ = app.tx.send(LoadResponse::new(req, result));
    }
}
