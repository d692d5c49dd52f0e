// src/view.rs
//
// View projector: records + search term + sort spec → display order.
//
// Pure and cheap to re-run. The result is a list of indices into the loaded
// records (`View::row_ix`), so the canonical record list is never cloned or
// reordered. Cells stay text; numbers exist only inside the comparator.

use std::cmp::Ordering;

use crate::config::consts::{ARR_COLUMN, COLUMNS, DEFAULT_SORT_COLUMN, NAME_COLUMN, NUMERIC_COLUMNS};
use crate::loader::Record;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    #[inline]
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "⬆",
            SortDirection::Descending => "⬇",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(DEFAULT_SORT_COLUMN)
    }
}

impl SortSpec {
    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self { key: s!(key), direction }
    }
    pub fn ascending(key: &str) -> Self { Self::new(key, SortDirection::Ascending) }
    pub fn descending(key: &str) -> Self { Self::new(key, SortDirection::Descending) }

    /// Same column flips direction; a different column resets to ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = s!(key);
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn is_numeric(&self) -> bool {
        is_numeric_column(&self.key)
    }
}

pub fn is_numeric_column(key: &str) -> bool {
    NUMERIC_COLUMNS.contains(&key)
}

/// Map user input onto one of the leaderboard columns, ignoring case
/// ("total" → "Total", "race days" → "Race Days").
pub fn column_named(name: &str) -> Option<&'static str> {
    let name = name.trim();
    COLUMNS.iter().copied().find(|c| c.eq_ignore_ascii_case(name))
}

/* ---------------- Numeric interpretation ---------------- */

/// Leading-number parse: skips leading whitespace, reads the longest numeric
/// prefix ("12abc" → 12, "1,234" → 1). Anything unparsable, absent, or NaN is 0.
pub fn parse_number(cell: Option<&str>) -> f64 {
    let Some(text) = cell else { return 0.0 };
    let v = numeric_prefix(text);
    if v.is_nan() { 0.0 } else { v }
}

fn numeric_prefix(text: &str) -> f64 {
    let t = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let b = t.as_bytes();
    let mut i = 0;

    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if t[i..].starts_with("Infinity") {
        return if b.first() == Some(&b'-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() { i += 1; }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() { j += 1; }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts if at least one digit follows.
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) { j += 1; }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() { j += 1; }
        if j > exp_start { i = j; }
    }

    t[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/* ---------------- Filtering ---------------- */

/// Case-folded substring on Name, verbatim substring on ARR.
/// An empty term keeps everything; absent cells never match.
pub fn matches_search(rec: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    matches_folded(rec, &term.to_lowercase(), term)
}

fn matches_folded(rec: &Record, folded: &str, raw: &str) -> bool {
    rec.get(NAME_COLUMN).is_some_and(|n| n.to_lowercase().contains(folded))
        || rec.get(ARR_COLUMN).is_some_and(|a| a.contains(raw))
}

/* ---------------- Sorting ---------------- */

fn cmp_numbers(a: f64, b: f64) -> Ordering {
    // parse_number never yields NaN, so this is total.
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Text order by UTF-16 code units; an absent cell sorts as "".
fn cmp_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or("");
    let b = b.unwrap_or("");
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Direction-aware comparison of two records under `sort`.
pub fn compare_records(a: &Record, b: &Record, sort: &SortSpec) -> Ordering {
    let key = sort.key.as_str();
    let ord = if sort.is_numeric() {
        cmp_numbers(parse_number(a.get(key)), parse_number(b.get(key)))
    } else {
        cmp_text(a.get(key), b.get(key))
    };
    sort.direction.apply(ord)
}

/// Filter then stable-sort. Returns positions into `records`.
pub fn project(records: &[Record], search: &str, sort: &SortSpec) -> Vec<usize> {
    let folded = search.to_lowercase();
    let mut row_ix: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| search.is_empty() || matches_folded(r, &folded, search))
        .map(|(i, _)| i)
        .collect();

    let key = sort.key.as_str();
    let dir = sort.direction;
    if sort.is_numeric() {
        // Parse each kept row once.
        let mut keyed: Vec<(usize, f64)> = row_ix
            .iter()
            .map(|&i| (i, parse_number(records[i].get(key))))
            .collect();
        keyed.sort_by(|a, b| dir.apply(cmp_numbers(a.1, b.1)));
        row_ix = keyed.into_iter().map(|(i, _)| i).collect();
    } else {
        row_ix.sort_by(|&a, &b| dir.apply(cmp_text(records[a].get(key), records[b].get(key))));
    }
    row_ix
}

pub fn summary_text(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} entries")
}

/// Zero-copy projected view over a record list.
#[derive(Clone, Debug)]
pub struct View<'a> {
    /// Positions of displayed records, in display order
    pub row_ix: Vec<usize>,
    records: &'a [Record],
}

impl<'a> View<'a> {
    pub fn new(records: &'a [Record], search: &str, sort: &SortSpec) -> Self {
        Self { row_ix: project(records, search, sort), records }
    }

    /// Rebuild from indices computed earlier (cached by the GUI).
    pub fn from_indices(records: &'a [Record], row_ix: Vec<usize>) -> Self {
        Self { row_ix, records }
    }

    /// Number of displayed records.
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Number of loaded records before filtering.
    pub fn total(&self) -> usize { self.records.len() }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.records.get(ix))
    }

    pub fn counts(&self) -> (usize, usize) {
        (self.len(), self.total())
    }

    pub fn summary(&self) -> String {
        summary_text(self.len(), self.total())
    }
}
