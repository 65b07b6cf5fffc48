//! HTTP record source backed by reqwest.

use crate::source::{FeedError, RecordSource};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Upstream used by the reference deployment
pub const DEFAULT_UPSTREAM_URL: &str = "https://json-data-1wm2.onrender.com";

/// JSON data endpoint over HTTP
pub struct HttpSource {
    http: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Transport {
                path: base_url.clone(),
                reason: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn get(&self, path: &str) -> Result<Value, FeedError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching record");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FeedError::Transport {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| FeedError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}
