//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;
use tokio::task::JoinHandle;
use wasm_serve::{lifecycle, ServeError, ServerConfig, Shutdown};

/// A running server on an ephemeral loopback port, serving a temp directory.
pub struct TestServer {
    pub addr: SocketAddr,
    pub root: TempDir,
    shutdown: Shutdown,
    handle: JoinHandle<Result<(), ServeError>>,
}

impl TestServer {
    /// Start a server over `root`.
    pub async fn start(root: TempDir) -> Self {
        let mut config = ServerConfig::with_root(root.path());
        config.listener.bind_address = "127.0.0.1:0".parse().unwrap();

        let (server, listener) = lifecycle::start(config).await.unwrap();
        let addr = listener.local_addr();

        let shutdown = Shutdown::new();
        let server_shutdown = shutdown.subscribe();
        let handle = tokio::spawn(server.run(listener, server_shutdown));

        Self {
            addr,
            root,
            shutdown,
            handle,
        }
    }

    /// Start a server over a fresh directory filled by `populate`.
    pub async fn with_files(populate: impl FnOnce(&Path)) -> Self {
        let root = tempfile::tempdir().unwrap();
        populate(root.path());
        Self::start(root).await
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the serve loop to return.
    #[allow(dead_code)]
    pub async fn stop(self) -> Result<(), ServeError> {
        self.shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked")
    }
}

/// HTTP client that ignores proxy environment settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}

/// Assert the three isolation headers with byte-exact values.
#[allow(dead_code)]
pub fn assert_isolation_headers(headers: &reqwest::header::HeaderMap) {
    assert_eq!(
        headers["access-control-allow-origin"].as_bytes(),
        b"localhost"
    );
    assert_eq!(
        headers["cross-origin-opener-policy"].as_bytes(),
        b"same-origin"
    );
    assert_eq!(
        headers["cross-origin-embedder-policy"].as_bytes(),
        b"require-corp"
    );
}

/// Deterministic, non-repeating-looking payload of `len` bytes.
#[allow(dead_code)]
pub fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}
