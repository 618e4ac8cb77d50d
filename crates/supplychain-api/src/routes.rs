use std::io;

use axum::Router;
use axum::routing::{delete, get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/suppliers", post(handlers::create_supplier))
        .route("/suppliers/{id}", delete(handlers::delete_supplier))
        .route("/parts", post(handlers::create_part))
        .route("/parts/{id}", delete(handlers::delete_part))
        .route("/fetch-and-insert", get(handlers::fetch_and_insert))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    info!(event = "server_listening", addr = %listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(event = "server_stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
