// tests/session.rs
//
// Board switching and the stale-response guard.

use peloton_board::boards::{BOARDS, BoardId};
use peloton_board::loader::{self, Record};
use peloton_board::session::{Applied, BoardData, LoadResponse, Session};
use peloton_board::source::DirSource;
use peloton_board::view::SortSpec;

fn one(name: &str) -> Vec<Record> {
    vec![[("#", "1"), ("Name", name)].into_iter().collect()]
}

#[test]
fn start_is_loading_with_a_request() {
    let (s, req) = Session::start(BoardId::Overall);
    assert!(s.data().is_loading());
    assert_eq!(req.board, BoardId::Overall);
    assert_eq!(req.resource(), "overall-points.csv");
    assert!(s.is_current(req.board, req.ticket));
    assert_eq!(s.summary(), "Loading...");
}

#[test]
fn switching_drops_old_rows_immediately() {
    let (mut s, req) = Session::start(BoardId::Overall);
    assert_eq!(s.apply(LoadResponse::new(req, Ok(one("A")))), Applied::Accepted);
    assert_eq!(s.data().records().len(), 1);

    let next = s.select(BoardId::Gc);
    assert_eq!(next.resource(), "gc-points.csv");
    assert!(s.data().is_loading());
    assert!(s.data().records().is_empty());
}

#[test]
fn every_select_takes_a_new_ticket() {
    let (mut s, first) = Session::start(BoardId::Overall);
    assert_eq!(s.ticket(), first.ticket);

    let switch = s.select(BoardId::Gc);
    let reload = s.select(BoardId::Gc);
    assert!(switch.ticket > first.ticket);
    assert!(reload.ticket > switch.ticket);
    assert_eq!(s.ticket(), reload.ticket);
    assert!(!s.is_current(switch.board, switch.ticket));
}

#[test]
fn response_for_previous_board_is_discarded() {
    let (mut s, first) = Session::start(BoardId::Overall);
    let second = s.select(BoardId::Stage);

    // Overall finishes after the user already moved to Stage.
    assert_eq!(s.apply(LoadResponse::new(first, Ok(one("late")))), Applied::Stale);
    assert!(s.data().is_loading());

    assert_eq!(s.apply(LoadResponse::new(second, Ok(one("fresh")))), Applied::Accepted);
    assert_eq!(s.data().records()[0].get("Name"), Some("fresh"));
}

#[test]
fn older_request_for_same_board_is_discarded() {
    // overall → stage → overall: the first overall response must not land.
    let (mut s, old) = Session::start(BoardId::Overall);
    s.select(BoardId::Stage);
    let new = s.select(BoardId::Overall);
    assert_eq!(old.board, new.board);

    assert_eq!(s.apply(LoadResponse::new(old, Ok(one("old")))), Applied::Stale);
    assert_eq!(s.apply(LoadResponse::new(new, Ok(one("new")))), Applied::Accepted);
    assert_eq!(s.data().records()[0].get("Name"), Some("new"));
}

#[test]
fn failed_load_is_empty_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let src = DirSource::new(dir.path());

    let (mut s, req) = Session::start(BoardId::Classics);
    let result = loader::load(&src, req.resource());
    assert_eq!(s.apply(LoadResponse::new(req, result)), Applied::Accepted);

    match s.data() {
        BoardData::Ready { records, error } => {
            assert!(records.is_empty());
            assert!(error.as_deref().unwrap().contains("classics-points.csv"));
        }
        BoardData::Loading => panic!("should be ready"),
    }
    assert_eq!(s.summary(), "Showing 0 of 0 entries");

    // Reselecting retries.
    let retry = s.select(BoardId::Classics);
    assert!(retry.ticket > req.ticket);
    assert!(s.data().is_loading());
}

#[test]
fn view_state_is_per_board() {
    let (mut s, _) = Session::start(BoardId::Overall);
    s.view_state_mut().search = "vin".into();
    s.view_state_mut().toggle_sort("Total");

    s.select(BoardId::Stage);
    assert_eq!(s.view_state().search, "");
    assert_eq!(s.view_state().sort, SortSpec::default());

    s.select(BoardId::Overall);
    assert_eq!(s.view_state().search, "vin");
    assert_eq!(s.view_state_for(BoardId::Overall).sort, SortSpec::ascending("Total"));
}

#[test]
fn project_uses_active_view_state() {
    let (mut s, req) = Session::start(BoardId::Overall);
    let records: Vec<Record> = vec![
        [("#", "1"), ("Name", "Tadej"), ("ARR", "900")].into_iter().collect(),
        [("#", "2"), ("Name", "Jonas"), ("ARR", "700")].into_iter().collect(),
    ];
    s.apply(LoadResponse::new(req, Ok(records)));
    s.view_state_mut().search = "jon".into();

    let view = s.project();
    assert_eq!(view.len(), 1);
    assert_eq!(s.summary(), "Showing 1 of 2 entries");
}

#[test]
fn board_table_is_consistent() {
    for (i, b) in BOARDS.iter().enumerate() {
        assert_eq!(b.id.index(), i);
        assert_eq!(b.id.source(), b);
        assert_eq!(b.id.as_str().parse::<BoardId>().unwrap(), b.id);
    }
    assert!("tour".parse::<BoardId>().is_err());
    assert_eq!("GC".parse::<BoardId>().unwrap(), BoardId::Gc);
}
