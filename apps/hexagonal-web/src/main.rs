//! Hexagonal Web - Entity Lookup Service
//!
//! HTTP adapter of the hexagonal entity lookup service. Requests flow
//! web handler -> service port -> repository port -> SQLite adapter.

mod config;
mod dto;
mod handlers;
mod routes;
mod state;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting hexagonal entity lookup service");

    let config = AppConfig::from_env()?;

    // Wire the repository port to its adapter
    let state = AppState::build(&config)?;

    // Build HTTP router
    let app = routes::create_router(state);

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
