//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use crate::api;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let app = api::build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!("Back-office server listening on {}", addr);

        let (signal_tx, signal_rx) = tokio::sync::oneshot::channel::<()>();
        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
                let _ = signal_tx.send(());
            })
            .into_future();
        tokio::pin!(serve);

        // In-flight requests get `shutdown_timeout_ms` to finish once Ctrl-C arrives
        let budget = Duration::from_millis(self.config.shutdown_timeout_ms);
        let deadline = async move {
            match signal_rx.await {
                Ok(()) => tokio::time::sleep(budget).await,
                Err(_) => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            res = &mut serve => res.map_err(|e| ServerError::Internal(e.into()))?,
            _ = deadline => {
                tracing::warn!(timeout_ms = budget.as_millis() as u64, "Graceful shutdown timed out, dropping open connections");
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}
