mod client;
mod config;
mod handlers;
mod model;
mod render;
mod session;
mod state;
mod templates;

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::client::VerifyClient;
use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!("[walletcheck] Starting walletcheck server");
    info!("[walletcheck] Verification service: {}", config.verifier_url);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;
    let api = VerifyClient::new(http, config.verifier_url.clone());

    let state = AppState {
        config: config.clone(),
        api,
    };

    // CORS configuration
    let cors = if let Some(ref origins) = config.cors_origins {
        let origins: Vec<_> = origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .route("/", get(handlers::index::index))
        .route("/lookup", get(handlers::lookup::lookup))
        .route("/health", get(handlers::health::health))
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("[walletcheck] Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
