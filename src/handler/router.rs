//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: resolves the request path against
//! the route table, notifies the observer, and hands off to a page handler.
//! Every request resolves to exactly one outcome and emits exactly one
//! complete response.

use crate::config::{AppState, RouteTable};
use crate::handler::pages;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Terminal outcomes of route resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Home,
    SystemInfo,
    PathInfo,
    Favicon,
    NotFound,
}

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    let ctx = RequestContext {
        path,
        is_head,
        access_log,
    };

    let outcome = resolve(ctx.path, &state.routes);
    notify_observer(&state, outcome, ctx.path);

    Ok(dispatch(&ctx, outcome))
}

/// Resolve a request path to its terminal outcome
///
/// Matching is exact string equality of the URI path against the configured
/// literals: no trailing-slash normalization, case-sensitive. Known
/// limitation, kept intentionally.
pub fn resolve(path: &str, routes: &RouteTable) -> RouteOutcome {
    if path == routes.favicon {
        RouteOutcome::Favicon
    } else if path == routes.home {
        RouteOutcome::Home
    } else if path == routes.system_info {
        RouteOutcome::SystemInfo
    } else if path == routes.path_info {
        RouteOutcome::PathInfo
    } else {
        RouteOutcome::NotFound
    }
}

/// Notify the observer with the raw path
///
/// The favicon short-circuit is the one request the observer never sees.
fn notify_observer(state: &AppState, outcome: RouteOutcome, path: &str) {
    if outcome != RouteOutcome::Favicon {
        state.observer.on_request(path);
    }
}

/// Dispatch the resolved outcome to its page handler
fn dispatch(ctx: &RequestContext<'_>, outcome: RouteOutcome) -> Response<Full<Bytes>> {
    match outcome {
        RouteOutcome::Home => pages::serve_home(ctx),
        RouteOutcome::SystemInfo => pages::serve_system_info(ctx),
        RouteOutcome::PathInfo => pages::serve_path_info(ctx),
        RouteOutcome::Favicon => pages::serve_favicon(ctx),
        RouteOutcome::NotFound => pages::serve_not_found(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, PerformanceConfig, ServerConfig};
    use crate::observer::RequestObserver;
    use std::sync::Mutex;

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            routes: RouteTable::default(),
        }
    }

    struct RecordingObserver {
        seen: Mutex<Vec<String>>,
    }

    impl RequestObserver for RecordingObserver {
        fn on_request(&self, path: &str) {
            self.seen.lock().unwrap().push(path.to_string());
        }
    }

    #[test]
    fn test_resolve_configured_literals() {
        let routes = RouteTable::default();
        assert_eq!(resolve("/", &routes), RouteOutcome::Home);
        assert_eq!(resolve("/os", &routes), RouteOutcome::SystemInfo);
        assert_eq!(resolve("/path", &routes), RouteOutcome::PathInfo);
        assert_eq!(resolve("/favicon.ico", &routes), RouteOutcome::Favicon);
    }

    #[test]
    fn test_resolve_unknown_paths() {
        let routes = RouteTable::default();
        assert_eq!(resolve("/xyz", &routes), RouteOutcome::NotFound);
        assert_eq!(resolve("", &routes), RouteOutcome::NotFound);
        assert_eq!(resolve("/os/extra", &routes), RouteOutcome::NotFound);
    }

    #[test]
    fn test_resolve_is_exact_match_only() {
        let routes = RouteTable::default();
        // Case-sensitive, no trailing-slash normalization
        assert_eq!(resolve("/OS", &routes), RouteOutcome::NotFound);
        assert_eq!(resolve("/os/", &routes), RouteOutcome::NotFound);
        assert_eq!(resolve("/path/", &routes), RouteOutcome::NotFound);
    }

    #[test]
    fn test_resolve_respects_custom_table() {
        let routes = RouteTable {
            home: "/index".to_string(),
            system_info: "/sys".to_string(),
            path_info: "/src".to_string(),
            favicon: "/icon".to_string(),
        };
        assert_eq!(resolve("/index", &routes), RouteOutcome::Home);
        assert_eq!(resolve("/sys", &routes), RouteOutcome::SystemInfo);
        assert_eq!(resolve("/", &routes), RouteOutcome::NotFound);
    }

    #[test]
    fn test_observer_notified_with_raw_path() {
        let observer = Arc::new(RecordingObserver {
            seen: Mutex::new(Vec::new()),
        });
        let state = AppState::new(&test_config(), Arc::<RecordingObserver>::clone(&observer));

        for path in ["/", "/os", "/nowhere"] {
            notify_observer(&state, resolve(path, &state.routes), path);
        }

        assert_eq!(*observer.seen.lock().unwrap(), vec!["/", "/os", "/nowhere"]);
    }

    #[test]
    fn test_observer_skipped_for_favicon() {
        let observer = Arc::new(RecordingObserver {
            seen: Mutex::new(Vec::new()),
        });
        let state = AppState::new(&test_config(), Arc::<RecordingObserver>::clone(&observer));

        let path = "/favicon.ico";
        notify_observer(&state, resolve(path, &state.routes), path);

        assert!(observer.seen.lock().unwrap().is_empty());
    }
}
