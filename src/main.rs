// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::domain::catalog::Catalog;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::in_memory_catalog::InMemoryCatalog;
use crate::presentation::app_state::AppState;
use crate::presentation::router::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let settings = load_settings()?;
    let granularity = settings.dashboard.granularity;

    // Create repository (infrastructure layer)
    let repository = Arc::new(InMemoryCatalog::new(Catalog::builtin(granularity)?));

    // Create application state
    let state = Arc::new(AppState::new(
        repository,
        granularity,
        settings.dashboard.title,
        settings.figure,
    ));

    // Build router (presentation layer)
    let router = create_router(state);

    // Start server
    let addr = settings.server.socket_addr()?;
    tracing::info!(%addr, ?granularity, "Starting factory-dashboard");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
