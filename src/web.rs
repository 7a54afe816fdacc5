use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::{api, config::UvDashConfig};

pub async fn run(config: UvDashConfig) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api::router(config.dashboard))
        .fallback_service(ServeDir::new("frontend/dist"))
        .layer(cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(
        "Dashboard running at http://localhost:{}",
        config.server.port
    );
    axum::serve(listener, app)
        .await
        .context("Web server error")?;
    Ok(())
}
