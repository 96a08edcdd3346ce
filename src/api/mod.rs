//! The two read-only JSON endpoints behind the season and date selectors.
//!
//!   GET /api/seasons          → `[Season]`
//!   GET /api/dates/{season}   → `[SeasonDate]`
//!
//! Transport sits behind `Fetcher` so the controller can be driven by the
//! browser's `fetch` (`http::HttpFetcher`) or an in-memory fake in tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::PageError;

pub mod http;
#[cfg(test)]
pub mod memory;

/// Issue a GET and resolve with the response body.
///
/// Non-2xx statuses are errors. No retries, no timeout.
#[async_trait(?Send)]
pub trait Fetcher {
    async fn get(&self, path: &str) -> Result<String, PageError>;
}

/// GET `path` and decode the body as JSON.
pub async fn get_json<T, F>(fetcher: &F, path: &str) -> Result<T, PageError>
where
    T: DeserializeOwned,
    F: Fetcher + ?Sized,
{
    let body = fetcher.get(path).await?;
    serde_json::from_str(&body).map_err(|source| PageError::Decode {
        path: path.to_string(),
        source,
    })
}

// ── Response models ────────────────────────────────────────────────

/// One entry of `/api/seasons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub season: String,
    pub display_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub data_collection_active: bool,
}

/// One entry of `/api/dates/{season}`.
///
/// The ratings server emits `snapshot_date`/`description`; older builds
/// emit `date`/`display_name`. Both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDate {
    #[serde(alias = "snapshot_date")]
    pub date: String,
    #[serde(default, alias = "description")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub total_players: Option<u64>,
}

impl SeasonDate {
    /// Display name, or the raw date when the server sent none.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.date)
    }
}
