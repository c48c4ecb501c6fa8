//! Contract API server

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use contract_api::{app, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contract_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    contract_analyzer::validate_catalog().context("built-in pattern catalog is invalid")?;

    info!("Initializing contract API...");
    let state = Arc::new(AppState::from_env()?);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3002);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting contract API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
