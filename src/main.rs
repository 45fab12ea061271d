//! Txport API Server
//!
//! REST API for batch transaction lookup and spreadsheet export
//!
//! Usage:
//!   cargo run --bin txport_api
//!
//! Environment:
//!   TXPORT_HOST        - Server host (default: 0.0.0.0)
//!   PORT / TXPORT_PORT - Server port (default: 8080)
//!   ETHERSCAN_API_KEY  - Etherscan key for Ethereum lookups (optional)
//!   TXPORT_EXPORT_DIR  - Spreadsheet output directory (default: exports)
//!   RUST_LOG           - Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use txport::api::{create_router, handlers::AppState, start_cleanup_task};
use txport::models::config::ServiceConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let config = ServiceConfig::from_env();
    let addr: SocketAddr = config.bind_addr().parse()?;

    // Create app state
    let state = Arc::new(AppState::new(config));

    // Start background cleanup task for rate limiter
    start_cleanup_task();

    // Create router
    let app = create_router(state);

    info!("Txport API starting on http://{}", addr);
    info!("");
    info!("Endpoints:");
    info!("  POST /v1/transactions/export   - Look up a batch of txids, generate spreadsheet");
    info!("  GET  /v1/transactions/download - Download the latest spreadsheet");
    info!("  GET  /v1/stats                 - Export statistics");
    info!("  GET  /v1/health                - Health check");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    // Start server with graceful shutdown
    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Txport API shutdown complete");

    Ok(())
}
