//! Startup orchestration.
//!
//! Validate first, then bind. Any error here is fatal: without the listener
//! no request can be served.

use crate::config::{validate_config, ServerConfig};
use crate::error::ServeError;
use crate::http::StaticServer;
use crate::net::Listener;

/// Validate `config`, bind its listener and build the server.
pub async fn start(config: ServerConfig) -> Result<(StaticServer, Listener), ServeError> {
    validate_config(&config)?;

    let listener = Listener::bind(&config.listener).await?;

    tracing::info!(
        address = %listener.local_addr(),
        root = %config.root.display(),
        "Serving files (localhost only, not for public use)"
    );

    Ok((StaticServer::new(config), listener))
}

/// Start serving the process working directory.
pub async fn start_in_current_dir() -> Result<(StaticServer, Listener), ServeError> {
    let config = ServerConfig::for_current_dir()?;
    start(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::ListenerError;

    #[tokio::test]
    async fn invalid_config_is_fatal_before_binding() {
        let mut config = ServerConfig::with_root("/definitely/not/a/real/dir");
        config.listener.bind_address = "127.0.0.1:0".parse().unwrap();

        let err = start(config).await.err().expect("start must fail");
        assert!(matches!(err, ServeError::Config(ref errors) if errors.len() == 1));
    }

    #[tokio::test]
    async fn current_dir_start_fails_while_port_is_held() {
        // Whoever holds 8000, a second bind must fail.
        let _held = tokio::net::TcpListener::bind("127.0.0.1:8000").await;

        let err = start_in_current_dir().await.err().expect("port 8000 is taken");
        assert!(matches!(err, ServeError::Listener(ListenerError::Bind { .. })));
    }

    #[tokio::test]
    async fn starts_on_ephemeral_port() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::with_root(dir.path());
        config.listener.bind_address = "127.0.0.1:0".parse().unwrap();

        let (server, listener) = start(config).await.unwrap();
        assert!(listener.local_addr().ip().is_loopback());
        assert_eq!(server.config().root, dir.path());
    }
}
