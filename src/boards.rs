// src/boards.rs
//
// The fixed set of leaderboards and the resource each one reads.
// Pure lookup; loading is driven by `session`.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoardId {
    Overall,
    Stage,
    Gc,
    Classics,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LeaderboardSource {
    pub id: BoardId,
    pub resource: &'static str,
    pub label: &'static str,
}

/// Tab order.
pub static BOARDS: [LeaderboardSource; 4] = [
    LeaderboardSource { id: BoardId::Overall,  resource: "overall-points.csv",  label: "Overall Points" },
    LeaderboardSource { id: BoardId::Stage,    resource: "stage-points.csv",    label: "Stage Points" },
    LeaderboardSource { id: BoardId::Gc,       resource: "gc-points.csv",       label: "GC Points" },
    LeaderboardSource { id: BoardId::Classics, resource: "classics-points.csv", label: "Classics Points" },
];

impl BoardId {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            BoardId::Overall => 0,
            BoardId::Stage => 1,
            BoardId::Gc => 2,
            BoardId::Classics => 3,
        }
    }

    #[inline]
    pub fn source(self) -> &'static LeaderboardSource { &BOARDS[self.index()] }

    pub fn resource(self) -> &'static str { self.source().resource }
    pub fn label(self) -> &'static str { self.source().label }

    pub fn as_str(self) -> &'static str {
        match self {
            BoardId::Overall => "overall",
            BoardId::Stage => "stage",
            BoardId::Gc => "gc",
            BoardId::Classics => "classics",
        }
    }
}

impl Default for BoardId {
    fn default() -> Self { BoardId::Overall }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown leaderboard '{0}' (expected one of: overall, stage, gc, classics)")]
pub struct UnknownBoard(pub String);

impl FromStr for BoardId {
    type Err = UnknownBoard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overall" => Ok(BoardId::Overall),
            "stage" => Ok(BoardId::Stage),
            "gc" => Ok(BoardId::Gc),
            "classics" => Ok(BoardId::Classics),
            other => Err(UnknownBoard(s!(other))),
        }
    }
}
