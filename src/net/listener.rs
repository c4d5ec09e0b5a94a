//! Loopback-only TCP listener.
//!
//! # Responsibilities
//! - Refuse to bind anything but a loopback address
//! - Bind the socket exactly once at startup
//! - Hand the bound socket to the HTTP server

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Address is reachable from outside this machine.
    #[error("refusing to bind non-loopback address {0}")]
    NotLoopback(SocketAddr),

    /// Failed to bind to address (e.g. already in use).
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Bound socket could not report its address.
    #[error("failed to read local address: {0}")]
    LocalAddr(#[source] std::io::Error),
}

/// A TCP listener bound to a loopback interface.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local_addr: SocketAddr,
}

impl Listener {
    /// Bind to the configured loopback address.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let address = config.bind_address;
        if !address.ip().is_loopback() {
            return Err(ListenerError::NotLoopback(address));
        }

        let inner = TcpListener::bind(address)
            .await
            .map_err(|source| ListenerError::Bind { address, source })?;

        let local_addr = inner.local_addr().map_err(ListenerError::LocalAddr)?;

        tracing::info!(address = %local_addr, "Listener bound");

        Ok(Self { inner, local_addr })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Release the underlying socket to the serve loop.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}
