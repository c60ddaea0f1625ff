// Application state module
// Immutable per-process state shared by every request

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::{Config, RouteTable};
use crate::observer::RequestObserver;

/// Application state
///
/// Built once at startup and shared read-only across all connections. No
/// request ever mutates it, so the request path needs no locks.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    /// Per-request notification hook, injected at construction
    pub observer: Arc<dyn RequestObserver>,
    /// Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config, observer: Arc<dyn RequestObserver>) -> Self {
        Self {
            config: config.clone(),
            routes: config.routes.clone(),
            observer,
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
