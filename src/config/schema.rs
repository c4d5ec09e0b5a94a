//! Configuration schema definitions.
//!
//! All values are fixed at compile time. The binary always runs with
//! [`ServerConfig::for_current_dir`]; the fields stay public so embedders and
//! tests can point the server at another root or an ephemeral port.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Loopback port the binary listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Root configuration for the file server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Directory files are served from.
    pub root: PathBuf,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ServerConfig {
    /// Configuration serving the process working directory.
    pub fn for_current_dir() -> std::io::Result<Self> {
        Ok(Self {
            root: std::env::current_dir()?,
            ..Self::default()
        })
    }

    /// Configuration serving `root` with otherwise default settings.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            root: PathBuf::from("."),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address. Must be a loopback address.
    pub bind_address: SocketAddr,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "wasm_serve=info,tower_http=info".to_string(),
        }
    }
}
