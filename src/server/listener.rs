use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tracing::{debug, error, info, warn, Instrument};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::static_files::Resolver;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Owns the listening socket and serves accepted connections one by one.
pub struct Server {
    listener: TcpListener,
    resolver: Arc<Resolver>,
    read_timeout: Option<Duration>,
    max_header_bytes: usize,
}

impl Server {
    /// Binds `cfg.listen_addr` with address reuse enabled and starts listening.
    pub async fn bind(cfg: &Config) -> Result<Self> {
        let addr = tokio::net::lookup_host(&cfg.listen_addr)
            .await
            .with_context(|| format!("Invalid listen address {}", cfg.listen_addr))?
            .next()
            .with_context(|| format!("Listen address {} resolved to nothing", cfg.listen_addr))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("Failed to bind {}", addr))?;
        let listener = socket.listen(cfg.backlog)?;

        info!("Listening on {}", listener.local_addr()?);

        let root_is_dir = tokio::fs::metadata(&cfg.root_dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !root_is_dir {
            warn!(root = %cfg.root_dir.display(), "Root directory does not exist, every request will 404");
        }

        Ok(Self {
            listener,
            resolver: Arc::new(Resolver::new(cfg.root_dir.clone())),
            read_timeout: cfg.read_timeout(),
            max_header_bytes: cfg.max_header_bytes,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts and serves connections until `shutdown` completes.
    ///
    /// `shutdown` is only polled while waiting in accept; a connection in
    /// progress always runs to completion first. The listener is closed when
    /// this returns.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            debug!("Waiting for a connection");

            let (socket, peer) = tokio::select! {
                res = self.listener.accept() => match res {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        error!(error = %e, "Failed to accept connection");
                        tokio::time::sleep(ACCEPT_BACKOFF).await;
                        continue;
                    }
                },

                _ = &mut shutdown => {
                    info!("Shutdown signal received");
                    break;
                }
            };

            info!("Accepted connection from {}", peer);
            self.serve(socket, peer).await;
        }

        Ok(())
    }

    async fn serve(&self, socket: TcpStream, peer: SocketAddr) {
        let conn = Connection::new(socket, Arc::clone(&self.resolver))
            .with_read_timeout(self.read_timeout)
            .with_max_header_bytes(self.max_header_bytes);
        let span = tracing::info_span!("connection", peer = %peer);

        // Awaited immediately: the next accept waits for this connection.
        match tokio::spawn(conn.run().instrument(span)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!(peer = %peer, "Connection error: {:#}", e),
            Err(e) => error!(peer = %peer, "Connection handler failed: {}", e),
        }
    }
}

/// Binds according to `cfg` and serves until `shutdown` completes.
pub async fn run<F>(cfg: &Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    Server::bind(cfg).await?.run(shutdown).await
}
