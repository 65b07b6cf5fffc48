//! Prometheus registry for the API and a metered record source.
use async_trait::async_trait;
use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use serde_json::Value;
use std::sync::Arc;
use voyage_feed::{FeedError, RecordSource};
use voyage_wizard::ExitReason;

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    /// Upstream fetches by outcome (`ok`, `transport`, `status`, `parse`)
    pub upstream_fetches: IntCounterVec,
    /// Wizard exits by reason
    pub wizard_exits: IntCounterVec,
    pub active_sessions: IntGauge,
    /// Get-in-touch submissions by outcome (`accepted`, `rejected`)
    pub contact_requests: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let upstream_fetches = IntCounterVec::new(
            Opts::new("voyage_upstream_fetches_total", "Upstream record fetches"),
            &["outcome"],
        )?;
        let wizard_exits = IntCounterVec::new(
            Opts::new("voyage_wizard_exits_total", "Itinerary wizard exits"),
            &["reason"],
        )?;
        let active_sessions =
            IntGauge::new("voyage_wizard_sessions_active", "Open itinerary wizard sessions")?;
        let contact_requests = IntCounterVec::new(
            Opts::new("voyage_contact_requests_total", "Get-in-touch submissions"),
            &["outcome"],
        )?;

        registry.register(Box::new(upstream_fetches.clone()))?;
        registry.register(Box::new(wizard_exits.clone()))?;
        registry.register(Box::new(active_sessions.clone()))?;
        registry.register(Box::new(contact_requests.clone()))?;

        Ok(Self {
            registry,
            upstream_fetches,
            wizard_exits,
            active_sessions,
            contact_requests,
        })
    }

    pub fn record_fetch(&self, result: &Result<Value, FeedError>) {
        let outcome = match result {
            Ok(_) => "ok",
            Err(FeedError::Transport { .. }) => "transport",
            Err(FeedError::Status { .. }) => "status",
            Err(FeedError::Parse { .. }) => "parse",
        };
        self.upstream_fetches.with_label_values(&[outcome]).inc();
    }

    pub fn record_exit(&self, reason: ExitReason) {
        let label = match reason {
            ExitReason::Abandoned => "abandoned",
            ExitReason::Finished => "finished",
        };
        self.wizard_exits.with_label_values(&[label]).inc();
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

/// Counts every fetch made through the wrapped source
pub struct MeteredSource {
    inner: Arc<dyn RecordSource>,
    metrics: Metrics,
}

impl MeteredSource {
    pub fn new(inner: Arc<dyn RecordSource>, metrics: Metrics) -> Self {
        Self { inner, metrics }
    }
}

#[async_trait]
impl RecordSource for MeteredSource {
    async fn get(&self, path: &str) -> Result<Value, FeedError> {
        let result = self.inner.get(path).await;
        self.metrics.record_fetch(&result);
        result
    }
}
