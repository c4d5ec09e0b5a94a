//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! startup and serve loop
//!     → tracing events (bind address, root, shutdown)
//! each request
//!     → tower_http TraceLayer span (method, uri, status, latency)
//!     → logging.rs subscriber → stderr
//! ```

pub mod logging;

pub use logging::init_logging;
