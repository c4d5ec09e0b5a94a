//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Accepted connection (one task each)
//!     → server.rs (axum serve loop, middleware stack)
//!     → ServeDir (files, index.html, trailing-slash redirect, 404/405)
//!     → listing.rs (directory without index.html)
//!     → isolation headers stamped on the way out
//!     → Send to client
//! ```

pub mod listing;
pub mod server;

pub use server::{StaticServer, SERVER_NAME};
