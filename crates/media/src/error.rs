use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the search, resolver, and download clients
#[derive(Debug, Error)]
pub enum MediaError {
    /// Transport-level HTTP failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The remote service answered with a non-success status
    #[error("request failed with status: {0}")]
    Status(StatusCode),
    /// The resolver answered but flagged the request as failed
    #[error("resolver rejected the request")]
    Rejected,
    /// The resolver answer carried no usable download URL
    #[error("resolver response missing download URL")]
    MissingDownloadUrl,
    /// Local file I/O failure while writing a download
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}
