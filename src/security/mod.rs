//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Any response leaving the router:
//!     → headers.rs (cross-origin isolation headers, overriding)
//!     → Sent to client
//! ```
//!
//! # Design Decisions
//! - Loopback-only exposure is enforced by the listener, not here
//! - Headers are applied outside every other layer so no status code escapes them

pub mod headers;

pub use headers::{isolation_headers, IsolationHeadersLayer, ISOLATION_HEADERS};
