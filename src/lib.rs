//! Listing server
//!
//! Serves a large generated in-memory dataset through a paginated,
//! searchable listing whose display order the user can rearrange, plus a
//! shared row selection.
//!
//! The dataset access layer lives under `domain`, `usecase` and `infra`;
//! [`usecase::access::DatasetAccess`] is the only entry point the HTTP
//! adapter (`routes`) uses.
//!
//! # Example
//!
//! ```ignore
//! use listview::{ListviewServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = ListviewServer::new(ServerConfig::default());
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod config_file;
pub mod domain;
pub mod error;
pub mod infra;
pub mod platform;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod ui;
pub mod usecase;


pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
pub use telemetry::{init_logging, TelemetryConfig};
pub use usecase::access::DatasetAccess;

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub struct ListviewServer {
    state: Arc<AppState>,
    router: Router,
}

impl ListviewServer {
    /// Generates the dataset and builds the router.
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(config));
        let router = routes::build_router(state.clone());
        Self { state, router }
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Get the router for testing
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve until Ctrl-C.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.state.config.listen_addr;
        let listener = TcpListener::bind(addr).await?;

        info!(
            addr = %addr,
            rows = self.state.access.dataset_size(),
            cors = self.state.config.cors_enabled,
            "listview server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
