use anyhow::{Context, Result};
use axum::{Router, routing::get};
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use podium_server::{
    AppState, PeerDirectory, RelayService, RoomRegistry, ServerConfig, peer_ws_handler,
    peer_ws_handler_anon, ws_handler,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();

    let state = AppState {
        relay: RelayService::new(RoomRegistry::new()),
        directory: PeerDirectory::new(),
    };

    let api = Router::new()
        .route("/ws", get(ws_handler))
        .route("/peer", get(peer_ws_handler_anon))
        .route("/peer/{peer_id}", get(peer_ws_handler))
        .layer(config.cors_layer()?)
        .with_state(state);

    // Nesting at the root is not supported by the router, so "/" keeps the
    // routes as-is.
    let app = if config.path == "/" || config.path.is_empty() {
        api
    } else {
        Router::new().nest(&config.path, api)
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Signaling server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
