//! Fake ratings server for tests. Routes with `matchit`, like the real one,
//! and records every requested path.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::api::Fetcher;
use crate::error::PageError;

#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Status(u16),
    NetworkDown,
}

impl Reply {
    pub fn body(body: impl Into<String>) -> Self {
        Reply::Body(body.into())
    }
}

#[derive(Debug, Default)]
pub struct MemoryFetcher {
    seasons: Option<Reply>,
    dates: HashMap<String, Reply>,
    requests: RefCell<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seasons(mut self, reply: Reply) -> Self {
        self.seasons = Some(reply);
        self
    }

    pub fn dates(mut self, season: &str, reply: Reply) -> Self {
        self.dates.insert(season.to_string(), reply);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn route(&self, path: &str) -> Reply {
        let mut router = matchit::Router::new();
        router.insert("/api/seasons", "seasons").ok();
        router.insert("/api/dates/{season}", "dates").ok();

        let reply = match router.at(path) {
            Ok(matched) => match *matched.value {
                "seasons" => self.seasons.clone(),
                "dates" => matched
                    .params
                    .get("season")
                    .and_then(|season| self.dates.get(season))
                    .cloned(),
                _ => None,
            },
            Err(_) => None,
        };
        reply.unwrap_or(Reply::Status(404))
    }
}

#[async_trait(?Send)]
impl Fetcher for MemoryFetcher {
    async fn get(&self, path: &str) -> Result<String, PageError> {
        self.requests.borrow_mut().push(path.to_string());
        match self.route(path) {
            Reply::Body(body) => Ok(body),
            Reply::Status(status) => Err(PageError::Status {
                path: path.to_string(),
                status,
            }),
            Reply::NetworkDown => Err(PageError::Fetch {
                path: path.to_string(),
                message: "Failed to fetch".into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn routes_by_path() {
        let fetcher = MemoryFetcher::new()
            .seasons(Reply::body("[]"))
            .dates("2024", Reply::body("[1]"));
        assert_eq!(block_on(fetcher.get("/api/seasons")).unwrap(), "[]");
        assert_eq!(block_on(fetcher.get("/api/dates/2024")).unwrap(), "[1]");
        assert!(matches!(
            block_on(fetcher.get("/api/dates/2023")),
            Err(PageError::Status { status: 404, .. })
        ));
        assert_eq!(
            fetcher.requests(),
            vec!["/api/seasons", "/api/dates/2024", "/api/dates/2023"]
        );
    }
}
