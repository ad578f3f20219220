//! Lantern page server
//!
//! Serves HTML pages rendered from templates on disk.
//!
//! # Architecture
//!
//! - **Routes**: map URLs to page names
//! - **Render**: compose layout, partials and page into a template set,
//!   execute it, and turn the result (or the failure) into a response
//! - **Cache**: compiled template sets shared between requests
//! - **Config**: defaults, optional file, environment overrides

#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{RenderError, RenderResult};
pub use render::{Renderer, TemplateData};
pub use state::AppState;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Server builder for constructing and running the page server.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Create a new server with the given configuration.
    pub async fn new(config: ServerConfig) -> Result<Self, anyhow::Error> {
        let state = AppState::new(&config).await?;
        Ok(Self { config, state })
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> Router {
        routes::create_router(self.state.clone()).layer(TraceLayer::new_for_http())
    }

    /// Shared state, e.g. for inspecting the template cache.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server, binding to the configured address.
    pub async fn run(self) -> Result<(), anyhow::Error> {
        let addr = self.addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(
            addr = %listener.local_addr()?,
            templates = %self.config.templates.dir.display(),
            use_cache = self.config.templates.use_cache,
            "Server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    /// The configured `host:port`.
    pub fn addr(&self) -> String {
        self.config.server.bind_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
