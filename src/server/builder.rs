//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::build_transaction_routes;
use crate::config::ServerConfig;
use crate::core::mock;
use crate::core::service::TransactionService;
use crate::storage::InMemoryQueryEngine;
use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Spreadsheet imports are posted whole
const IMPORT_BODY_LIMIT: usize = 64 * 1024 * 1024;

/// Builder for creating the dashboard HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(ServerConfig::from_yaml_file("salesboard.yaml")?)
///     .build()?;
/// ```
pub struct ServerBuilder {
    service: Option<Arc<dyn TransactionService>>,
    config: ServerConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            service: None,
            config: ServerConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the query engine
    ///
    /// When omitted, an [`InMemoryQueryEngine`] is created and seeded with
    /// `config.seed_records` mock transactions.
    pub fn with_service(mut self, service: impl TransactionService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Share an engine that is also driven from outside the server
    pub fn with_shared_service(mut self, service: Arc<dyn TransactionService>) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the shared application state
    pub fn build_state(&mut self) -> Result<AppState> {
        self.config.validate_config()?;

        let service = match self.service.take() {
            Some(service) => service,
            None => {
                let records = mock::generate(self.config.seed_records, self.config.seed);
                tracing::info!(records = records.len(), "Seeding in-memory dataset");
                Arc::new(InMemoryQueryEngine::with_records(records)) as Arc<dyn TransactionService>
            }
        };

        Ok(AppState {
            service,
            config: Arc::new(self.config.clone()),
        })
    }

    /// Build the final router
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state()?;

        let mut app = build_transaction_routes(state);
        for routes in self.custom_routes {
            app = app.merge(routes);
        }

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(IMPORT_BODY_LIMIT)),
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `config.host:config.port` and handles SIGTERM and Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
