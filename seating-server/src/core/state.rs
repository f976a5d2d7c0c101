use std::sync::Arc;

use crate::core::Config;
use crate::db::{MemoryStore, SeatingStore};
use crate::middleware::RateLimiter;
use crate::seating::SeatingEngine;

/// Server state - shared handles to every service
///
/// Cloning is cheap; all fields are reference counted.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | configuration (immutable) |
/// | store | record store behind the engine |
/// | seating | seating engine, owner of every plan mutation |
/// | lookup_limiter | rate limiter for the public guest lookup |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<dyn SeatingStore>,
    pub seating: SeatingEngine,
    pub lookup_limiter: RateLimiter,
}

impl ServerState {
    pub fn new(config: Config, store: Arc<dyn SeatingStore>) -> Self {
        Self {
            seating: SeatingEngine::new(store.clone()),
            lookup_limiter: RateLimiter::new(),
            config,
            store,
        }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()))
    }
}
