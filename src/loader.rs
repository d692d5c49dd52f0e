// src/loader.rs
//
// Tabular data loader: resource name → records.
//
//   fetch bytes → csv::parse_rows → find_header_row → records_from_rows
//
// A missing header row is "no data", not an error. Fetch and parse failures
// are errors, but `load_or_empty` turns them into an empty board plus a
// message so the view never breaks.

use thiserror::Error;

use crate::config::consts::HEADER_SENTINEL;
use crate::csv::{self, RawRow};
use crate::source::{Fetch, FetchError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch failed for {resource}: {source}")]
    Fetch {
        resource: String,
        #[source]
        source: FetchError,
    },

    #[error("parse failed for {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: ::csv::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadErrorKind {
    FetchFailed,
    ParseFailed,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Fetch { .. } => LoadErrorKind::FetchFailed,
            LoadError::Parse { .. } => LoadErrorKind::ParseFailed,
        }
    }

    pub fn resource(&self) -> &str {
        match self {
            LoadError::Fetch { resource, .. } | LoadError::Parse { resource, .. } => resource,
        }
    }
}

/// One competitor row keyed by header name.
///
/// Keys follow the header row's order. A cell missing from a short row is
/// `None`, never an empty string. Repeated header names keep their first
/// position and take the later column's value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    /// Insert or overwrite `key`.
    pub fn insert(&mut self, key: &str, value: Option<String>) {
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.fields.push((s!(key), value));
        }
    }

    /// Cell text, or `None` if the key is unknown or the cell was missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rec = Record::new();
        for (k, v) in iter {
            rec.insert(k.as_ref(), Some(s!(v.as_ref())));
        }
        rec
    }
}

/// Index of the first row whose first cell is exactly the header sentinel.
pub fn find_header_row(rows: &[RawRow]) -> Option<usize> {
    rows.iter()
        .position(|row| row.first().is_some_and(|c| c == HEADER_SENTINEL))
}

/// Project every row after the header onto the header's names, by position.
/// Extra cells past the header width are dropped.
pub fn records_from_rows(rows: &[RawRow]) -> Vec<Record> {
    let Some(h) = find_header_row(rows) else {
        return Vec::new();
    };
    let header = &rows[h];

    rows[h + 1..]
        .iter()
        .map(|row| {
            let mut rec = Record::new();
            for (ix, key) in header.iter().enumerate() {
                rec.insert(key, row.get(ix).cloned());
            }
            rec
        })
        .collect()
}

/// Parse already-fetched CSV bytes into records.
pub fn parse_records(resource: &str, bytes: &[u8]) -> Result<Vec<Record>, LoadError> {
    let rows = csv::parse_rows(bytes).map_err(|source| LoadError::Parse {
        resource: s!(resource),
        source,
    })?;

    if find_header_row(&rows).is_none() {
        logw!("Load: {} has no '{}' header row ({} rows); treating as empty", resource, HEADER_SENTINEL, rows.len());
    }
    Ok(records_from_rows(&rows))
}

/// Fetch and parse one resource. Blocks; run it off the UI thread.
pub fn load(source: &dyn Fetch, resource: &str) -> Result<Vec<Record>, LoadError> {
    logd!("Load: fetching {} from {}", resource, source.describe());
    let bytes = source.fetch(resource).map_err(|source| LoadError::Fetch {
        resource: s!(resource),
        source,
    })?;
    let records = parse_records(resource, &bytes)?;
    logf!("Load: {} → {} record(s)", resource, records.len());
    Ok(records)
}

/// Boundary policy: errors are logged and degrade to an empty record list.
/// The error text is handed back for display.
pub fn load_or_empty(source: &dyn Fetch, resource: &str) -> (Vec<Record>, Option<String>) {
    match load(source, resource) {
        Ok(records) => (records, None),
        Err(e) => {
            loge!("Load: {:?} {}", e.kind(), e);
            (Vec::new(), Some(e.to_string()))
        }
    }
}
