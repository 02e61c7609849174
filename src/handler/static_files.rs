//! Static file resolution
//!
//! Resolves request paths against the canonicalized static root, probing
//! the index document for directory paths. Anything that does not resolve
//! to a file is answered with the SPA fallback document so the client-side
//! router owns the route; only a failed read of an existing file is an
//! error.

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Outcome of resolving a request path against the static root.
#[derive(Debug)]
enum Resolved {
    File(Vec<u8>, &'static str),
    NotFound,
    ReadError(std::io::Error),
}

/// Serve a request path from the static root, falling back to the entry
/// document for any path without a matching file.
pub async fn serve(
    state: &AppState,
    path: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match resolve(&state.static_root, &state.config.assets.index, path).await {
        Resolved::File(content, content_type) => {
            http::build_file_response(&content, content_type, is_head)
        }
        Resolved::NotFound => serve_fallback(state, is_head).await,
        Resolved::ReadError(e) => {
            logger::log_error(&format!("Failed to read file for '{path}': {e}"));
            http::build_500_response()
        }
    }
}

/// Serve the fallback document with status 200 for client-side routing.
async fn serve_fallback(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(&state.fallback).await {
        Ok(content) => http::build_fallback_response(&content, is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read fallback document '{}': {e}",
                state.fallback.display()
            ));
            http::build_500_response()
        }
    }
}

/// Resolve a request path to file bytes and a content type.
///
/// `static_root` must already be canonical; the resolved target is
/// canonicalized and required to stay under it, so traversal sequences
/// cannot escape the root.
async fn resolve(static_root: &Path, index: &str, path: &str) -> Resolved {
    let relative = path.trim_start_matches('/');

    let Some(candidate) = join_sanitized(static_root, relative) else {
        logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
        return Resolved::NotFound;
    };

    // Directory paths (including "/") probe the index document.
    let candidate = if relative.is_empty() || relative.ends_with('/') || candidate.is_dir() {
        candidate.join(index)
    } else {
        candidate
    };

    // Canonicalize to resolve symlinks before the containment check. Any
    // failure means no file matches this path (missing component, or a file
    // used as a directory) and the fallback applies.
    let Ok(canonical) = candidate.canonicalize() else {
        return Resolved::NotFound;
    };
    if !canonical.starts_with(static_root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    if !canonical.is_file() {
        return Resolved::NotFound;
    }

    match fs::read(&canonical).await {
        Ok(content) => {
            let content_type = mime::get_content_type(canonical.extension().and_then(|e| e.to_str()));
            Resolved::File(content, content_type)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Resolved::NotFound,
        Err(e) => Resolved::ReadError(e),
    }
}

/// Join a relative request path onto the root, rejecting parent-directory
/// components outright.
fn join_sanitized(static_root: &Path, relative: &str) -> Option<PathBuf> {
    let mut joined = static_root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(joined)
}
