use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::scoring::compatibility::CompatibilityScorer;
use crate::session::SessionStore;
use crate::upstream::UpstreamClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    /// Pluggable compatibility scorer. Default: HeuristicScorer.
    pub scorer: Arc<dyn CompatibilityScorer>,
    /// Listings, mentors and seed data. Read-only after startup.
    pub catalog: Arc<Catalog>,
    /// Session and checklist persistence. File-backed in production.
    pub store: Arc<dyn SessionStore>,
    /// Held across every load-modify-save of a stored document. Never held
    /// while waiting on the upstream service.
    pub store_lock: Arc<Mutex<()>>,
}

#[cfg(test)]
pub(crate) mod testing {
    use std::time::Duration;

    use super::*;
    use crate::scoring::compatibility::HeuristicScorer;
    use crate::session::InMemorySessionStore;

    /// State backed by an in-memory store and the given upstream base URL.
    pub fn state_with_upstream(base_url: String, timeout: Duration) -> AppState {
        AppState {
            upstream: UpstreamClient::new(base_url, "user_12345", timeout).unwrap(),
            scorer: Arc::new(HeuristicScorer),
            catalog: Arc::new(Catalog::seeded()),
            store: Arc::new(InMemorySessionStore::default()),
            store_lock: Arc::default(),
        }
    }
}
