// src/config/consts.rs

// Data layout
pub const HEADER_SENTINEL: &str = "#";
pub const COLUMNS: [&str; 8] = ["#", "Name", "ARR", "Race Days", "Stage", "Classics", "GC", "Total"];
pub const NUMERIC_COLUMNS: [&str; 7] = ["#", "ARR", "Race Days", "Stage", "Classics", "GC", "Total"];
pub const NAME_COLUMN: &str = "Name";
pub const ARR_COLUMN: &str = "ARR";
pub const DEFAULT_SORT_COLUMN: &str = "#";

// Source
pub const DEFAULT_DATA_DIR: &str = "data";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "peloton_board=info";
pub const CLI_LOG_FILTER: &str = "peloton_board=warn";

// Window
pub const APP_TITLE: &str = "Peloton Leaderboards";
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
