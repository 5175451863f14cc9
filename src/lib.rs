//! Webroot - minimal static content server
//!
//! Serves files and plain-text directory listings from a single root
//! directory over HTTP/1.1, one connection at a time.

pub mod config;
pub mod http;
pub mod logging;
pub mod server;
pub mod static_files;
