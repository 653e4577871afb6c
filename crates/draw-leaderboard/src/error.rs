//! Failure taxonomy for a leaderboard fetch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("no element with id=\"{0}\" in page")]
    MissingContainer(String),

    #[error("container element has no {0} attribute")]
    MissingAttribute(String),

    #[error("invalid page payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("page payload has no {0}")]
    MissingDraws(&'static str),

    #[error("{0} is empty")]
    EmptyDraws(&'static str),
}

impl FetchError {
    /// True when the page was fetched but the container or its payload
    /// attribute could not be found.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            FetchError::MissingContainer(_) | FetchError::MissingAttribute(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
