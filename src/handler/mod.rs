//! Request handling
//!
//! Gates on HTTP method, then hands every GET/HEAD path to static file
//! resolution. There is no route table: any path that does not resolve to a
//! file gets the SPA fallback document.

pub mod static_files;

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Handle a single request.
///
/// Generic over the body type because the body is never read (only GET and
/// HEAD are served); tests drive this with `Request<()>`.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let is_head = *method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    if !matches!(*method, Method::GET | Method::HEAD) {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return Ok(http::build_405_response());
    }

    let response = static_files::serve(&state, uri.path(), is_head).await;

    if access_log {
        logger::log_response(response.status().as_u16(), body_size(&response));
    }

    Ok(response)
}

fn body_size(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
