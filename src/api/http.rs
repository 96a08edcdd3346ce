//! `Fetcher` over the browser's `fetch`.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::api::Fetcher;
use crate::error::PageError;
use crate::page::dom::js_error_message;

pub struct HttpFetcher {
    window: Window,
}

impl HttpFetcher {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
    async fn get(&self, path: &str) -> Result<String, PageError> {
        let failed = |err| PageError::Fetch {
            path: path.to_string(),
            message: js_error_message(err, "request failed"),
        };

        let response = JsFuture::from(self.window.fetch_with_str(path))
            .await
            .map_err(failed)?;
        let response: Response = response.dyn_into().map_err(failed)?;
        if !response.ok() {
            return Err(PageError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }

        let text = JsFuture::from(response.text().map_err(failed)?)
            .await
            .map_err(failed)?;
        text.as_string().ok_or_else(|| PageError::Fetch {
            path: path.to_string(),
            message: "response body is not text".into(),
        })
    }
}
