//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (loopback check, bind once)
//!     → Listener handed to the HTTP layer
//!     → axum accept loop, one task per connection
//! ```

pub mod listener;

pub use listener::{Listener, ListenerError};
