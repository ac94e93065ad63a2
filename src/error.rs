use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Login/password is incorrect, login returned HTTP {status}")]
    Authentication { status: StatusCode },

    #[error("{what} not found on page {page}")]
    Extraction { page: String, what: String },

    #[error("Unsupported grade table layout with {cells} numeric cells: {reason}")]
    UnsupportedSchema { cells: usize, reason: &'static str },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
