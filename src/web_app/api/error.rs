// web_app/api/error.rs - Errors raised while fetching the product list

use thiserror::Error;

/// Every way the product fetch can fail. The page treats them all alike;
/// the distinction only matters for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("request to products API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("products API returned an unreadable payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            FetchError::Decode(_) => None,
        }
    }
}
