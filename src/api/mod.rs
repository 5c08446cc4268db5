//! HTTP API module for the investment calculators.
//!
//! This module provides the REST API endpoints for running calculations,
//! exporting schedules and reading the configured input bounds.

mod handlers;
mod response;
mod state;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;

/// Binds to `0.0.0.0:<port>` and serves the API until the process exits.
pub async fn run_http_server(port: u16, state: AppState) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Calculator HTTP API listening");

    axum::serve(listener, app).await
}
