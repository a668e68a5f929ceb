//! Error types for catalog loading.

use thiserror::Error;

/// Everything that can go wrong while fetching and decoding `projects.json`.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status} {status_text} while fetching catalog")]
    Http { status: u16, status_text: String },

    /// Transport failure or unreadable body
    #[error("network error: {0}")]
    Network(String),

    /// Body is not valid JSON
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Body is JSON but the top level is not an array
    #[error("catalog JSON must be an array of projects")]
    NotAnArray,
}

impl From<gloo_net::Error> for CatalogError {
    fn from(err: gloo_net::Error) -> Self {
        CatalogError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
