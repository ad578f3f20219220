//! Shared application state.

use crate::config::ServerConfig;
use crate::render::Renderer;
use anyhow::Context;
use std::sync::Arc;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    /// Build the renderer and compile the configured preload pages.
    pub async fn new(config: &ServerConfig) -> Result<Self, anyhow::Error> {
        let renderer = Renderer::from_config(&config.templates);

        renderer
            .preload(config.templates.preload.as_slice())
            .await
            .context("Failed to preload templates")?;

        Ok(Self {
            config: Arc::new(config.clone()),
            renderer: Arc::new(renderer),
        })
    }
}
