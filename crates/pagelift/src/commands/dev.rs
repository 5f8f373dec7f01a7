//! Development server command.

use std::path::Path;

use anyhow::Result;
use pagelift_server::{DevServer, DevServerConfig};

use crate::config::load_config;

/// Run the dev server.
pub async fn run(
    config_path: &Path,
    port: Option<u16>,
    pages: Option<String>,
    open: bool,
) -> Result<()> {
    let file_config = load_config(config_path)?;

    let config = DevServerConfig {
        pages_dir: pages.or(file_config.pages.dir),
        port: port.unwrap_or(file_config.server.port),
        open: open && file_config.server.open,
        ..DevServerConfig::default()
    };

    tracing::info!("Starting development server on port {}", config.port);

    DevServer::new(config).start().await?;

    Ok(())
}
