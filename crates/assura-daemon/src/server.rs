//! Server setup and lifecycle management

use std::sync::Arc;

use tokio::net::TcpListener;

use assura_store::{InMemoryStore, JsonFileStore, MeasurementStore};

use crate::api::create_router;
use crate::api::state::AppState;
use crate::config::{DaemonConfig, StorageConfig};
use crate::error::{DaemonError, DaemonResult};

/// Assura daemon server
pub struct Server {
    config: DaemonConfig,
    store: Arc<dyn MeasurementStore>,
}

impl Server {
    /// Create a new server with the given configuration
    pub async fn new(config: DaemonConfig) -> DaemonResult<Self> {
        let store: Arc<dyn MeasurementStore> = match &config.storage {
            StorageConfig::Memory => Arc::new(InMemoryStore::new()),
            StorageConfig::File { path } => Arc::new(JsonFileStore::open(path.clone()).await?),
        };

        Ok(Self { config, store })
    }

    /// Run the server
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        let state = AppState::new(self.store.clone(), self.config.dashboard.clone());
        let app = create_router(state, self.config.server.enable_cors);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("assurad listening on {}", addr);
        tracing::info!(
            dimensions = self.config.dashboard.dimensions.len(),
            "dashboard configuration loaded"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("assurad shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
