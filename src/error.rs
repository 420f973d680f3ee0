use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from fetching a page. Link extraction itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// The page URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not be sent or the body could not be read
    #[error("Failed to fetch URL: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error {status} for {url}")]
    Status { url: String, status: StatusCode },

    /// Reading a local document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
