//! Page-level destination loading with stale-result protection.
//!
//! Every load is stamped with a monotonic ticket. A completion only commits
//! when its ticket is still the latest one issued, so a slow response for an
//! earlier destination can never overwrite a newer page. `dispose` retires
//! all outstanding tickets.

use crate::destination::{self, DestinationNormalizer};
use crate::source::FeedError;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use voyage_core::{DestinationView, PageState};

/// Stamp of one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

pub struct DestinationLoader {
    normalizer: DestinationNormalizer,
    latest: AtomicU64,
    state: watch::Sender<PageState<DestinationView>>,
}

impl DestinationLoader {
    pub fn new(normalizer: DestinationNormalizer) -> Self {
        let (state, _) = watch::channel(PageState::Idle);
        Self {
            normalizer,
            latest: AtomicU64::new(0),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PageState<DestinationView>> {
        self.state.subscribe()
    }

    pub fn state(&self) -> PageState<DestinationView> {
        self.state.borrow().clone()
    }

    /// Issue a new ticket and enter the loading state
    pub fn begin(&self) -> Ticket {
        let mut ticket = Ticket(0);
        self.state.send_modify(|state| {
            ticket = Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
            *state = PageState::Loading;
        });
        ticket
    }

    /// Commit a result if `ticket` is still current. Returns whether it was applied.
    pub fn complete(&self, ticket: Ticket, result: Result<DestinationView, FeedError>) -> bool {
        let mut result = Some(result);
        let applied = self.state.send_if_modified(|state| {
            if ticket.0 != self.latest.load(Ordering::SeqCst) {
                return false;
            }
            match result.take() {
                Some(result) => {
                    *state = destination::page_state(result);
                    true
                }
                None => false,
            }
        });

        if !applied {
            tracing::warn!(ticket = ticket.0, "discarding stale destination result");
        }
        applied
    }

    /// Retire every outstanding ticket; later completions are dropped
    pub fn dispose(&self) {
        self.state.send_if_modified(|_| {
            self.latest.fetch_add(1, Ordering::SeqCst);
            false
        });
    }

    /// Fetch `slug` and commit the outcome unless superseded
    pub async fn load(&self, slug: &str) -> bool {
        let ticket = self.begin();
        let result = self.normalizer.load(slug).await;
        self.complete(ticket, result)
    }
}
