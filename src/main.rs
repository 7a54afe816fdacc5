use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use uvdash::config::UvDashConfig;
use uvdash::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = UvDashConfig::load()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    tracing::info!(version = uvdash::VERSION, "Starting UVDash");
    web::run(config).await
}
