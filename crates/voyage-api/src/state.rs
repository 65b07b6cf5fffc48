//! Shared application state and the wizard session store.
use crate::error::ApiError;
use crate::metrics::{MeteredSource, Metrics};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;
use voyage_catalog::DestinationCatalog;
use voyage_core::{CatalogConfig, DestinationName};
use voyage_feed::{DestinationNormalizer, HomeLoader, RecordSource};
use voyage_wizard::{ItineraryWizard, SummaryRenderer, WizardPolicy};

pub struct WizardSession {
    pub wizard: ItineraryWizard,
    pub started_at: DateTime<Utc>,
    /// Last time an action or read touched the session
    pub last_active: DateTime<Utc>,
}

/// Open wizards keyed by session id
#[derive(Clone, Default)]
pub struct WizardSessions {
    inner: Arc<Mutex<HashMap<Uuid, WizardSession>>>,
}

impl WizardSessions {
    pub async fn insert(&self, wizard: ItineraryWizard) -> (Uuid, DateTime<Utc>) {
        let id = Uuid::new_v4();
        let started_at = Utc::now();
        self.inner.lock().await.insert(
            id,
            WizardSession {
                wizard,
                started_at,
                last_active: started_at,
            },
        );
        (id, started_at)
    }

    /// Runs `f` against the session, or fails with `SessionNotFound`
    pub async fn with<F, T>(&self, id: Uuid, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut WizardSession) -> Result<T, ApiError>,
    {
        let mut sessions = self.inner.lock().await;
        let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound(id))?;
        session.last_active = Utc::now();
        f(session)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.lock().await.remove(&id).is_some()
    }

    /// Drops every session idle since before `cutoff`; returns how many went
    pub async fn evict_idle_since(&self, cutoff: DateTime<Utc>) -> usize {
        let mut sessions = self.inner.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_active >= cutoff);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<DestinationCatalog>,
    pub destinations: DestinationNormalizer,
    pub home: HomeLoader,
    pub renderer: Arc<SummaryRenderer>,
    pub policy: WizardPolicy,
    pub sessions: WizardSessions,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        config: CatalogConfig,
        source: Arc<dyn RecordSource>,
        policy: WizardPolicy,
    ) -> Result<Self, ApiError> {
        config.validate()?;
        let metrics = Metrics::new()?;
        let config = Arc::new(config);
        let source: Arc<dyn RecordSource> = Arc::new(MeteredSource::new(source, metrics.clone()));

        Ok(Self {
            catalog: Arc::new(DestinationCatalog::from_config(&config)),
            destinations: DestinationNormalizer::new(source.clone(), config.clone()),
            home: HomeLoader::new(source, config),
            renderer: Arc::new(SummaryRenderer::new()?),
            policy,
            sessions: WizardSessions::default(),
            metrics,
        })
    }

    /// Evicts sessions idle for longer than `ttl` and settles the gauge
    pub async fn sweep_idle_sessions(&self, ttl: Duration) -> usize {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        let cutoff = Utc::now().checked_sub_signed(ttl).unwrap_or(DateTime::<Utc>::MIN_UTC);
        let evicted = self.sessions.evict_idle_since(cutoff).await;
        if evicted > 0 {
            self.metrics.active_sessions.sub(evicted as i64);
            tracing::info!(evicted, "evicted idle itinerary wizard sessions");
        }
        evicted
    }

    /// New wizard for `destination`, reporting its exit to the metrics
    pub fn start_wizard(&self, destination: DestinationName) -> ItineraryWizard {
        let metrics = self.metrics.clone();
        ItineraryWizard::with_policy(destination, self.policy).on_exit(move |reason, draft| {
            tracing::info!(?reason, destination = %draft.destination, "itinerary wizard closed");
            metrics.record_exit(reason);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_feed::StaticSource;

    fn state() -> AppState {
        AppState::new(
            CatalogConfig::reference(),
            Arc::new(StaticSource::new()),
            WizardPolicy::permissive(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let state = state();
        let wizard = state.start_wizard(DestinationName::new("Japan"));
        let (id, _) = state.sessions.insert(wizard).await;
        assert_eq!(state.sessions.len().await, 1);

        let step = state
            .sessions
            .with(id, |s| Ok(s.wizard.next()))
            .await
            .unwrap();
        assert!(!step.is_exit());

        assert!(state.sessions.remove(id).await);
        assert!(matches!(
            state.sessions.with(id, |_| Ok(())).await,
            Err(ApiError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_idle_sessions_are_evicted() {
        let state = state();
        let (stale, _) = state.sessions.insert(state.start_wizard(DestinationName::new("Japan"))).await;
        state.metrics.active_sessions.inc();
        assert_eq!(state.sweep_idle_sessions(Duration::from_secs(3600)).await, 0);

        tokio::time::sleep(Duration::from_millis(300)).await;
        let (fresh, _) = state.sessions.insert(state.start_wizard(DestinationName::new("Bali"))).await;
        state.metrics.active_sessions.inc();

        // Only the session idle for longer than the ttl goes
        assert_eq!(state.sweep_idle_sessions(Duration::from_millis(200)).await, 1);
        assert!(state.sessions.with(fresh, |_| Ok(())).await.is_ok());
        assert!(matches!(
            state.sessions.with(stale, |_| Ok(())).await,
            Err(ApiError::SessionNotFound(_))
        ));
        assert_eq!(state.metrics.active_sessions.get(), 1);
    }

    #[tokio::test]
    async fn test_activity_keeps_session_alive() {
        let state = state();
        let (id, _) = state.sessions.insert(state.start_wizard(DestinationName::new("Japan"))).await;

        tokio::time::sleep(Duration::from_millis(300)).await;
        state.sessions.with(id, |s| Ok(s.wizard.next())).await.unwrap();

        assert_eq!(state.sweep_idle_sessions(Duration::from_millis(200)).await, 0);
        assert_eq!(state.sessions.len().await, 1);
    }

    #[test]
    fn test_rejects_invalid_catalog() {
        let mut config = CatalogConfig::reference();
        config.destinations.clear();
        assert!(AppState::new(config, Arc::new(StaticSource::new()), WizardPolicy::default()).is_err());
    }
}
