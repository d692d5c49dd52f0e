// src/config/state.rs
use crate::view::SortSpec;

/// Per-leaderboard view inputs. Owned by whoever renders the board and passed
/// into the projector as plain data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub search: String,
    pub sort: SortSpec,
}

impl ViewState {
    /// Header click: same column flips direction, new column starts ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort.toggle(key);
    }
}
