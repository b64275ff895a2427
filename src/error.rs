//! Error types for data acquisition and the cache store.
//!
//! Neither error ever reaches the user: both are logged and mapped to "no
//! data" by the usage sources.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to get a live snapshot from the status endpoint.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// Connection, TLS, timeout, non-2xx status or undecodable body
    #[error("status request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failure to read or write the cache file.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache file {path} not accessible: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cache file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache file does not hold a JSON object")]
    NotAnObject,
}
