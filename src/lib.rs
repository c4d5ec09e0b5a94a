//! Localhost-only static file server for WebAssembly debugging.
//!
//! Serves the working directory on `127.0.0.1:8000` and stamps every response
//! with the headers browsers require before they expose `SharedArrayBuffer`:
//!
//! ```text
//! Access-Control-Allow-Origin: localhost
//! Cross-Origin-Opener-Policy: same-origin
//! Cross-Origin-Embedder-Policy: require-corp
//! ```
//!
//! Not suitable for public serving.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod security;

pub use config::ServerConfig;
pub use error::ServeError;
pub use http::StaticServer;
pub use lifecycle::Shutdown;
