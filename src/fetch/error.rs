use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    Body(String, #[source] reqwest::Error),

    #[error("Failed to decode response from {0}")]
    Decode(String, #[source] reqwest::Error),

    // Stream errors while copying a download to disk
    #[error("Transfer from {url} failed")]
    Transfer {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write download from {url} to '{path}'")]
    WriteIo {
        url: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
