//! `wasm-serve`: serve the current directory on 127.0.0.1:8000 with
//! cross-origin isolation headers. No flags, no environment variables.

use wasm_serve::config::ObservabilityConfig;
use wasm_serve::lifecycle::{self, signals, Shutdown};
use wasm_serve::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&ObservabilityConfig::default())?;

    tracing::info!("wasm-serve v{} starting", env!("CARGO_PKG_VERSION"));

    // Unreadable working directory or bind failure (e.g. port in use) is fatal.
    let (server, listener) = match lifecycle::start_in_current_dir().await {
        Ok(started) => started,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::forward_to(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
