//! Voyage API /v1: REST endpoints over the catalog, feeds and wizard
//!
//! # Example
//!
//! ```ignore
//! use voyage_api::{run, ApiConfig};
//!
//! let config = ApiConfig::from_env()?;
//! run(config).await?;
//! ```
pub mod config;
pub mod contact;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod state;

pub use config::ApiConfig;
pub use error::ApiError;
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use voyage_feed::HttpSource;

/// Upper bound on the time between idle-session sweeps
pub const SESSION_SWEEP_PERIOD: Duration = Duration::from_secs(60);

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health))
        .route("/v1/destinations", get(handlers::search_destinations))
        .route("/v1/destinations/{slug}", get(handlers::get_destination))
        .route("/v1/home", get(handlers::home))
        .route("/v1/wizard", post(handlers::start_wizard))
        .route("/v1/wizard/{id}", get(handlers::get_wizard))
        .route("/v1/wizard/{id}/actions", post(handlers::wizard_action))
        .route("/v1/contact", post(handlers::submit_contact))
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::cors())
        .layer(middleware::trace())
        .with_state(state)
}

pub async fn run(config: ApiConfig) -> Result<(), ApiError> {
    let catalog = config.load_catalog()?;
    let source = HttpSource::new(config.upstream_url.clone(), config.http_timeout)
        .map_err(voyage_core::VoyageError::from)?;
    let state = AppState::new(catalog, Arc::new(source), config.wizard_policy()?)?;
    spawn_session_sweeper(state.clone(), config.session_ttl);

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;

    tracing::info!(addr = %config.addr, upstream = %config.upstream_url, "Voyage API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Periodically evicts wizard sessions idle for longer than `ttl`
pub fn spawn_session_sweeper(state: AppState, ttl: Duration) -> tokio::task::JoinHandle<()> {
    let period = ttl.min(SESSION_SWEEP_PERIOD).max(Duration::from_millis(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            state.sweep_idle_sessions(ttl).await;
        }
    })
}
