//! Page handlers
//!
//! One function per route outcome. Each builds its page content (invoking a
//! collector when the page needs one) and pairs it with the right status
//! code. Collectors run synchronously at request time; records live only for
//! the response being built.

use crate::collector;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use crate::render;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Titles of the two table pages
const SYSTEM_INFO_TITLE: &str = "System Info";
const PATH_INFO_TITLE: &str = "File Path Info";

/// Serve the static home page
pub fn serve_home(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let html = render::home_page();
    log_body(ctx, html.len());
    http::build_html_response(html, ctx.is_head)
}

/// Serve the system information table
pub fn serve_system_info(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let record = collector::system::collect();
    let html = render::table_page(&record, SYSTEM_INFO_TITLE);
    log_body(ctx, html.len());
    http::build_html_response(html, ctx.is_head)
}

/// Serve the source path information table
pub fn serve_path_info(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let record = collector::path::collect();
    let html = render::table_page(&record, PATH_INFO_TITLE);
    log_body(ctx, html.len());
    http::build_html_response(html, ctx.is_head)
}

/// Favicon short-circuit: empty 204, no page body
pub fn serve_favicon(_ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    http::build_no_content_response()
}

/// Serve the fixed not-found page
pub fn serve_not_found(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let html = render::not_found_page();
    log_body(ctx, html.len());
    http::build_not_found_response(html, ctx.is_head)
}

fn log_body(ctx: &RequestContext<'_>, body_bytes: usize) {
    if ctx.access_log {
        logger::log_response(body_bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_ctx(path: &str) -> RequestContext<'_> {
        RequestContext {
            path,
            is_head: false,
            access_log: false,
        }
    }

    #[test]
    fn test_serve_home_is_200() {
        let resp = serve_home(&quiet_ctx("/"));
        assert_eq!(resp.status(), 200);
    }

    #[test]
    fn test_serve_system_info_is_200_html() {
        let resp = serve_system_info(&quiet_ctx("/os"));
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_serve_favicon_is_204() {
        let resp = serve_favicon(&quiet_ctx("/favicon.ico"));
        assert_eq!(resp.status(), 204);
    }

    #[test]
    fn test_serve_not_found_is_404() {
        let resp = serve_not_found(&quiet_ctx("/missing"));
        assert_eq!(resp.status(), 404);
    }
}
