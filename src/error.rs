//! Error type shared by the controller, the page bindings and the fetch layer.
//!
//! Only `InvalidPage` ever reaches the user (as an alert). Everything else is
//! logged at the operation boundary and dropped.

use thiserror::Error;

use crate::page::Role;

#[derive(Debug, Error)]
pub enum PageError {
    /// Page jump outside `1..=max`. The display text is the alert shown to the user.
    #[error("Please enter a page number between 1 and {max}")]
    InvalidPage { max: i64 },

    #[error("page element missing: {0}")]
    MissingElement(Role),

    #[error("max page count missing or malformed")]
    MissingMaxPages,

    #[error("sort column must not be empty")]
    EmptyColumn,

    #[error("browser window unavailable")]
    NoWindow,

    #[error("invalid page url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid page config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("dom operation failed: {0}")]
    Dom(String),

    #[error("request to {path} failed: {message}")]
    Fetch { path: String, message: String },

    #[error("request to {path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("malformed response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PageError {
    /// User input errors, as opposed to integration or network failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPage { .. } | Self::EmptyColumn)
    }

    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }
}

/// Log a failed operation and discard the error.
///
/// Validation failures log at `warn`, everything else at `error`.
pub fn report<T>(operation: &str, result: Result<T, PageError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) if err.is_validation() => {
            tracing::warn!(operation, %err, "rejected");
            None
        }
        Err(err) => {
            tracing::error!(operation, %err, "failed");
            None
        }
    }
}
