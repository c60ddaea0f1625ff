//! Request observer module
//!
//! Per-request notification hook. The dispatcher calls the observer once per
//! dispatched request (favicon excluded) with the raw request path. Observers
//! are logging sinks only; they have no effect on the response.

use crate::logger;

/// Observer notified with each dispatched request path
pub trait RequestObserver: Send + Sync {
    fn on_request(&self, path: &str);
}

/// Default observer: writes an access line to the process console
pub struct ConsoleObserver;

impl RequestObserver for ConsoleObserver {
    fn on_request(&self, path: &str) {
        logger::log_user_access(path);
    }
}
