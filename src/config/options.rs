// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportFormat,
}

/// Where the leaderboard CSV files are served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataLocation {
    Dir(PathBuf),
    Url(String),
}

impl Default for DataLocation {
    fn default() -> Self {
        DataLocation::Dir(PathBuf::from(DEFAULT_DATA_DIR))
    }
}

impl DataLocation {
    /// `http://` / `https://` → URL base, anything else → directory.
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        let lower = t.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataLocation::Url(s!(t))
        } else {
            DataLocation::Dir(PathBuf::from(t))
        }
    }
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLocation::Dir(p) => write!(f, "{}", p.display()),
            DataLocation::Url(u) => f.write_str(u),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub location: DataLocation,
    pub http_timeout: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            location: DataLocation::default(),
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    #[default]
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}
