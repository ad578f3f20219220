//! Lantern Server Binary

use anyhow::{anyhow, Result};
use lantern_server::config::{load_config, validate_config};
use lantern_server::Server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = load_config()?;

    lantern_common_log::init(config.logging.to_log_config())?;

    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            tracing::error!(%error, "Invalid configuration");
        }
        return Err(anyhow!("{} configuration error(s)", errors.len()));
    }

    info!("Starting Lantern Server v{}", env!("CARGO_PKG_VERSION"));

    let server = Server::new(config).await?;
    server.run().await?;

    info!("Server shutdown complete");
    Ok(())
}
