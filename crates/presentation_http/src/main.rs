//! ResQroute artifact server
//!
//! Serves the last rendered route map until interrupted.

use infrastructure::{AppConfig, init_logging, telemetry::DEFAULT_LOG_FILTER};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(config.server.log_format, DEFAULT_LOG_FILTER)?;

    info!("ResQroute server v{} starting...", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    presentation_http::serve(&config.server, config.map.output_path.clone()).await?;
    Ok(())
}
