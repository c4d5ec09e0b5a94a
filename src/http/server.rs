//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the Axum router around `ServeDir`
//! - Wire up middleware (tracing, server header, isolation headers)
//! - Run the serve loop on a bound listener until shutdown

use std::path::Path;
use std::sync::Arc;

use axum::{
    handler::Handler,
    http::{header, HeaderValue},
    middleware, Router,
};
use tokio::sync::broadcast;
use tower_http::{
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::ServeError;
use crate::http::listing::{directory_listing, reject_file_with_trailing_slash};
use crate::lifecycle::shutdown;
use crate::net::Listener;
use crate::security::isolation_headers;

/// Value of the `Server` response header.
pub const SERVER_NAME: &str = concat!("wasm-serve/", env!("CARGO_PKG_VERSION"));

/// Static file server for WebAssembly debugging.
pub struct StaticServer {
    router: Router,
    config: ServerConfig,
}

impl StaticServer {
    /// Create a new server for the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The isolation headers are the outermost layer so they land on every
    /// response, including redirects, 404s and 405s. Requests are logged at
    /// INFO as an access log.
    fn build_router(config: &ServerConfig) -> Router {
        let root = Arc::new(config.root.clone());
        let listing = directory_listing.with_state(Arc::clone(&root));

        let files = ServeDir::new(&config.root)
            .append_index_html_on_directories(true)
            .fallback(listing);

        Router::new()
            .fallback_service(files)
            .layer(middleware::from_fn_with_state(
                root,
                reject_file_with_trailing_slash,
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::SERVER,
                HeaderValue::from_static(SERVER_NAME),
            ))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(isolation_headers())
    }

    /// The router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Directory being served.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Serve connections from `listener` until `signal` fires.
    ///
    /// Each connection runs on its own task; a slow download never holds up
    /// the accept loop or other clients.
    pub async fn run(
        self,
        listener: Listener,
        signal: broadcast::Receiver<()>,
    ) -> Result<(), ServeError> {
        tracing::info!(
            address = %listener.local_addr(),
            root = %self.root().display(),
            "HTTP server starting"
        );

        axum::serve(listener.into_inner(), self.router)
            .with_graceful_shutdown(shutdown::wait(signal))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
