use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

// =============================================================================
// Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Reads `HOST` and `PORT`, falling back to the defaults when unset.
    ///
    /// # Errors
    ///
    /// Fails when `PORT` is set but is not a port number.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("HOST")
            .filter(|host| !host.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = match lookup("PORT").filter(|port| !port.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{raw}'"))?,
            None => defaults.port,
        };
        Ok(Self::new(host, port))
    }

    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

// =============================================================================
// Server
// =============================================================================

pub struct Server {
    config: ServerConfig,
}

impl Server {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Serves `router` until Ctrl+C or SIGTERM, then drains in-flight
    /// requests.
    ///
    /// # Errors
    ///
    /// Fails when the listener cannot bind or the server stops abnormally.
    pub async fn run(self, router: Router) -> anyhow::Result<()> {
        let address = self.config.socket_addr();

        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;
        let local: SocketAddr = listener.local_addr()?;

        tracing::info!(address = %local, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

// =============================================================================
// Shutdown Signal
// =============================================================================

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
