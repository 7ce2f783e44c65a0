//! Bookshelf HTTP Service
//!
//! An HTTP service for managing an in-memory collection of book records.
//! Provides create, list-with-filtering, fetch-by-id, update, and delete
//! operations over a JSON wire contract.
//!
//! ## Features
//!
//! - Book management with reading-progress metadata
//! - Case-insensitive name filtering plus reading/finished flags
//! - Structured logging and tracing

use tokio::net::TcpListener;
use tracing::info;

use bookshelf_service::{
    config::AppConfig, create_book_service, error::AppResult, tracing::tracer::Tracer,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::get();

    Tracer::install()?;

    info!(
        "Starting {} v{}",
        config.distribution.name,
        config.distribution.version.as_ref().unwrap(),
    );

    start(config).await?;

    Ok(())
}

async fn start(config: &AppConfig) -> AppResult<()> {
    let adapter = create_book_service();

    let listener = TcpListener::bind(config.server.http_address).await?;
    info!("HTTP server started at {}", config.server.http_address);

    axum::serve(listener, adapter.into_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}
