//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! compiled-in defaults
//!     → schema.rs (ServerConfig, rooted at the launch directory)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → handed to the listener and the HTTP server
//! ```
//!
//! # Design Decisions
//! - Nothing is read from files, flags, or environment variables
//! - Bind address and port are constants; restart to change them
//! - Validation reports every problem, not just the first

pub mod schema;
pub mod validation;

pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ServerConfig;
pub use validation::{validate_config, ValidationError};
