//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: GET only, one request per
//! connection, responses framed by closing the connection.
//!
//! # Architecture
//!
//! - **`connection`**: Drives one accepted stream through the state machine below
//! - **`parser`**: Extracts method and path from the request line
//! - **`request`**: Parsed request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until CRLF CRLF
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Parsing   │ ── non-GET ──────────┐
//!        └──────┬──────┘                      │
//!               ▼                             │
//!        ┌─────────────┐                      │
//!        │  Resolving  │ ── missing ──────────┤
//!        └──────┬──────┘                      │
//!               ▼                             ▼
//!        ┌──────────────────────────────────────┐
//!        │  Responding (200 / 404 / 405)        │
//!        └──────┬───────────────────────────────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Closed    │ ← Reached on every path, including errors
//!        └─────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use webroot::http::connection::Connection;
//! use webroot::static_files::Resolver;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:10000").await?;
//!     let resolver = Arc::new(Resolver::new("webroot"));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let conn = Connection::new(socket, Arc::clone(&resolver));
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {:#}", e);
//!         }
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
