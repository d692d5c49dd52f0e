// src/source.rs
//
// The file-serving side: hand back the raw bytes of a named CSV resource.
// Either a local directory or an HTTP base URL.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::config::options::{DataLocation, SourceOptions};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },
}

/// Anything that can serve a resource by name. Must be shareable with load workers.
pub trait Fetch: Send + Sync {
    fn fetch(&self, resource: &str) -> Result<Vec<u8>, FetchError>;

    /// Human-readable location, for logs and the status line.
    fn describe(&self) -> String;
}

pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetch for DirSource {
    fn fetch(&self, resource: &str) -> Result<Vec<u8>, FetchError> {
        let path = self.root.join(resource);
        fs::read(&path).map_err(|source| FetchError::Io { path, source })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

pub struct HttpSource {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        let agent: ureq::Agent = config.into();
        Self { base_url: s!(base_url.trim_end_matches('/')), agent }
    }

    pub fn url_for(&self, resource: &str) -> String {
        join!(&self.base_url, "/", resource.trim_start_matches('/'))
    }
}

impl Fetch for HttpSource {
    fn fetch(&self, resource: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.url_for(resource);
        // Non-2xx statuses come back as Err from ureq.
        let mut resp = self
            .agent
            .get(&url)
            .call()
            .map_err(|source| FetchError::Http { url: url.clone(), source })?;
        resp.body_mut()
            .read_to_vec()
            .map_err(|source| FetchError::Http { url, source })
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Build the configured source.
pub fn from_options(opts: &SourceOptions) -> Box<dyn Fetch> {
    match &opts.location {
        DataLocation::Dir(dir) => Box::new(DirSource::new(dir.clone())),
        DataLocation::Url(url) => Box::new(HttpSource::new(url, opts.http_timeout)),
    }
}
