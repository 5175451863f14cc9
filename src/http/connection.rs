use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::http::parser::{find_headers_end, parse_request, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::static_files::{Resolver, Resource};

const READ_CHUNK: usize = 1024;
const DEFAULT_MAX_HEADER_BYTES: usize = 16 * 1024;

/// Drives a single request/response exchange on one accepted stream.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    resolver: Arc<Resolver>,
    read_timeout: Option<Duration>,
    max_header_bytes: usize,
}

#[derive(Debug)]
pub enum ConnectionState {
    Reading,
    Parsing(String),
    Resolving(Request),
    Responding(Response),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, resolver: Arc<Resolver>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK * 4),
            state: ConnectionState::Reading,
            resolver,
            read_timeout: None,
            max_header_bytes: DEFAULT_MAX_HEADER_BYTES,
        }
    }

    pub fn with_read_timeout(mut self, read_timeout: Option<Duration>) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn with_max_header_bytes(mut self, max_header_bytes: usize) -> Self {
        self.max_header_bytes = max_header_bytes;
        self
    }

    /// Runs the exchange to completion.
    ///
    /// The stream is owned by the connection and dropped when this returns,
    /// so it is closed on every path. An `Err` means nothing (or only part of
    /// a response) was written.
    pub async fn run(mut self) -> Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => {
                    let header_block = self.read_header_block().await?;
                    tracing::debug!(request = %header_block, "Request received");
                    ConnectionState::Parsing(header_block)
                }

                ConnectionState::Parsing(header_block) => match parse_request(&header_block) {
                    Ok(request) => ConnectionState::Resolving(request),
                    Err(ParseError::UnsupportedMethod(method)) => {
                        tracing::info!(method = %method, "Method not allowed");
                        ConnectionState::Responding(Response::method_not_allowed())
                    }
                    Err(e @ ParseError::MissingPath) => {
                        return Err(anyhow::Error::new(e).context("Malformed request line"));
                    }
                },

                ConnectionState::Resolving(request) => {
                    match self.resolver.resolve(&request.path).await? {
                        Resource::Content { body, mime_type } => {
                            tracing::debug!(path = %request.path, mime_type = %mime_type, "Resolved");
                            ConnectionState::Responding(Response::ok(body, &mime_type))
                        }
                        Resource::NotFound => {
                            tracing::info!(path = %request.path, "Resource not found");
                            ConnectionState::Responding(Response::not_found())
                        }
                    }
                }

                ConnectionState::Responding(response) => {
                    let mut writer = ResponseWriter::new(&response);
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("Failed to write response")?;
                    self.stream
                        .shutdown()
                        .await
                        .context("Failed to close connection")?;

                    tracing::info!(
                        status = response.status.as_u16(),
                        bytes = writer.written(),
                        "Response sent"
                    );
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads until CRLF CRLF has arrived and returns everything up to and
    /// including it. Bytes after the separator are never looked at.
    async fn read_header_block(&mut self) -> Result<String> {
        let mut scan_from = 0;

        loop {
            if let Some(pos) = find_headers_end(&self.buffer[scan_from..]) {
                let end = scan_from + pos + 4;
                let header_block = std::str::from_utf8(&self.buffer[..end])
                    .context("Request headers are not valid UTF-8")?;
                return Ok(header_block.to_string());
            }

            if self.buffer.len() >= self.max_header_bytes {
                anyhow::bail!(
                    "Request headers exceed {} bytes without terminator",
                    self.max_header_bytes
                );
            }

            // A separator split across two reads starts at most 3 bytes back
            scan_from = self.buffer.len().saturating_sub(3);

            let n = self.read_chunk().await?;
            if n == 0 {
                anyhow::bail!("Client closed connection before end of request headers");
            }
        }
    }

    async fn read_chunk(&mut self) -> Result<usize> {
        let mut temp = [0u8; READ_CHUNK];
        let read = self.stream.read(&mut temp);

        let n = match self.read_timeout {
            Some(limit) => timeout(limit, read)
                .await
                .context("Timed out waiting for request")?,
            None => read.await,
        }
        .context("Failed to read request")?;

        self.buffer.extend_from_slice(&temp[..n]);
        Ok(n)
    }
}
