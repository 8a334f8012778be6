use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};

/// Command-line configuration. Port, path prefix, and the cross-origin
/// allow-list are the only knobs this service has.
#[derive(Parser, Debug, Clone)]
#[command(name = "podium-server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(long, default_value_t = 3001)]
    pub port: u16,

    /// Path prefix for the signaling and peer endpoints.
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Allowed cross-origin caller; repeatable. Empty means any origin.
    #[arg(long = "allow-origin")]
    pub allow_origins: Vec<String>,
}

impl ServerConfig {
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if self.allow_origins.is_empty() {
            return Ok(layer.allow_origin(Any));
        }

        let origins = self
            .allow_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("invalid origin '{}'", origin))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(layer.allow_origin(origins))
    }
}
