// src/session.rs
//
// Which leaderboard is active, what it currently shows, and which load
// response is allowed to land.
//
// Every selection issues a fresh `LoadRequest` with a new ticket and drops
// the previous records immediately. A response is applied only if it carries
// the active board AND the latest ticket; anything else is stale and dropped.
// Loads are never cancelled, only ignored.

use crate::boards::BoardId;
use crate::config::state::ViewState;
use crate::loader::{LoadError, Record};
use crate::view::View;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub board: BoardId,
    pub ticket: u64,
}

impl LoadRequest {
    pub fn resource(&self) -> &'static str {
        self.board.resource()
    }
}

#[derive(Debug)]
pub struct LoadResponse {
    pub board: BoardId,
    pub ticket: u64,
    pub result: Result<Vec<Record>, LoadError>,
}

impl LoadResponse {
    pub fn new(req: LoadRequest, result: Result<Vec<Record>, LoadError>) -> Self {
        Self { board: req.board, ticket: req.ticket, result }
    }
}

/// What the active board has right now.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardData {
    Loading,
    /// Load finished. A failed load is an empty record list plus the error text.
    Ready {
        records: Vec<Record>,
        error: Option<String>,
    },
}

impl BoardData {
    pub fn is_loading(&self) -> bool {
        matches!(self, BoardData::Loading)
    }

    pub fn records(&self) -> &[Record] {
        match self {
            BoardData::Ready { records, .. } => records,
            BoardData::Loading => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            BoardData::Ready { error, .. } => error.as_deref(),
            BoardData::Loading => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Accepted,
    Stale,
}

#[derive(Debug)]
pub struct Session {
    active: BoardId,
    ticket: u64,
    data: BoardData,
    /// Search + sort per board; survives tab switches.
    views: [ViewState; 4],
}

impl Session {
    /// New session on `board`; the caller must run the returned request.
    pub fn start(board: BoardId) -> (Self, LoadRequest) {
        let mut session = Self {
            active: board,
            ticket: 0,
            data: BoardData::Loading,
            views: Default::default(),
        };
        let req = session.select(board);
        (session, req)
    }

    #[inline] pub fn active(&self) -> BoardId { self.active }
    #[inline] pub fn ticket(&self) -> u64 { self.ticket }
    #[inline] pub fn data(&self) -> &BoardData { &self.data }

    /// Switch to `board` (or reload it, if already active). Resets to Loading
    /// right away so the old rows never show under the new label.
    pub fn select(&mut self, board: BoardId) -> LoadRequest {
        if board != self.active {
            logf!("Session: {} → {}", self.active, board);
        } else {
            logd!("Session: reload {}", board);
        }
        self.active = board;
        self.ticket += 1;
        self.data = BoardData::Loading;
        LoadRequest { board, ticket: self.ticket }
    }

    pub fn is_current(&self, board: BoardId, ticket: u64) -> bool {
        board == self.active && ticket == self.ticket
    }

    /// Apply a finished load if it's still wanted.
    pub fn apply(&mut self, resp: LoadResponse) -> Applied {
        if !self.is_current(resp.board, resp.ticket) {
            logd!(
                "Session: dropping stale response {}#{} (active {}#{})",
                resp.board, resp.ticket, self.active, self.ticket
            );
            return Applied::Stale;
        }

        self.data = match resp.result {
            Ok(records) => {
                logd!("Session: {} ready, {} record(s)", resp.board, records.len());
                BoardData::Ready { records, error: None }
            }
            Err(e) => {
                loge!("Session: {} failed ({:?}): {}", resp.board, e.kind(), e);
                BoardData::Ready { records: Vec::new(), error: Some(e.to_string()) }
            }
        };
        Applied::Accepted
    }

    pub fn view_state(&self) -> &ViewState {
        &self.views[self.active.index()]
    }

    pub fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.views[self.active.index()]
    }

    pub fn view_state_for(&self, board: BoardId) -> &ViewState {
        &self.views[board.index()]
    }

    /// Project the active board with its own search + sort.
    pub fn project(&self) -> View<'_> {
        let vs = self.view_state();
        View::new(self.data.records(), &vs.search, &vs.sort)
    }

    /// Status-line text.
    pub fn summary(&self) -> String {
        match &self.data {
            BoardData::Loading => s!("Loading..."),
            BoardData::Ready { .. } => self.project().summary(),
        }
    }
}
