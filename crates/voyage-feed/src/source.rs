//! Record sources: where raw destination/banner payloads come from.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use voyage_core::VoyageError;

/// Upstream paths
pub mod paths {
    pub const BANNERS: &str = "/banners";
    pub const FEATURED: &str = "/featured-destination";

    /// `/destination/{slug}`; the slug is passed through untouched
    pub fn destination(slug: &str) -> String {
        format!("/destination/{}", slug)
    }
}

/// Failure fetching or decoding a remote record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("request to {path} failed: {reason}")]
    Transport { path: String, reason: String },

    #[error("{path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("malformed payload from {path}: {reason}")]
    Parse { path: String, reason: String },
}

impl From<FeedError> for VoyageError {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::Parse { .. } => VoyageError::ParseError(err.to_string()),
            _ => VoyageError::FetchError(err.to_string()),
        }
    }
}

/// A remote JSON data endpoint
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Single GET of `path`, decoded as JSON
    async fn get(&self, path: &str) -> Result<Value, FeedError>;
}

/// In-memory source keyed by path. Unknown paths answer 404.
#[derive(Default)]
pub struct StaticSource {
    records: HashMap<String, Result<Value, FeedError>>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    log: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, path: impl Into<String>, payload: Value) -> Self {
        self.records.insert(path.into(), Ok(payload));
        self
    }

    pub fn with_failure(mut self, path: impl Into<String>, error: FeedError) -> Self {
        self.records.insert(path.into(), Err(error));
        self
    }

    /// Delay the answer for `path`
    pub fn with_delay(mut self, path: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(path.into(), delay);
        self
    }

    /// Total number of fetches served
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Paths requested, in order
    pub fn requested(&self) -> Vec<String> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn get(&self, path: &str) -> Result<Value, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut log) = self.log.lock() {
            log.push(path.to_string());
        }

        if let Some(delay) = self.delays.get(path) {
            tokio::time::sleep(*delay).await;
        }

        match self.records.get(path) {
            Some(record) => record.clone(),
            None => Err(FeedError::Status {
                path: path.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_static_source_counts_calls() {
        let source = StaticSource::new().with_record("/banners", json!({ "banners": [] }));

        assert!(source.get("/banners").await.is_ok());
        assert!(source.get("/banners").await.is_ok());
        let missing = source.get("/nope").await.unwrap_err();

        assert_eq!(source.calls(), 3);
        assert_eq!(
            missing,
            FeedError::Status { path: "/nope".to_string(), status: 404 }
        );
        assert_eq!(source.requested(), vec!["/banners", "/banners", "/nope"]);
    }

    #[test]
    fn test_error_conversion() {
        let parse: VoyageError = FeedError::Parse {
            path: "/x".to_string(),
            reason: "bad".to_string(),
        }
        .into();
        assert_eq!(parse.code(), "PARSE");

        let status: VoyageError = FeedError::Status { path: "/x".to_string(), status: 500 }.into();
        assert_eq!(status.code(), "FETCH");
    }
}
