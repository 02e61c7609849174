//! Static-asset server for a pre-built single-page frontend.
//!
//! Serves files from a fixed directory over HTTP/1.1 and falls back to the
//! SPA entry document (`index.html`) for any path that does not match a
//! file, so the client-side router owns all non-asset routes. Also exposes
//! the [`settings`] module, which resolves the immutable configuration
//! object the browser application consumes.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod settings;
