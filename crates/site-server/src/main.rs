//! TRust Landing Page Host
//!
//! Axum-based static host for the bundled WASM frontend. No application
//! endpoints beyond a health check; everything else is served from the
//! bundle directory.

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn health_check() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Trunk writes the bundle to dist/ by default
    let dist = std::env::var("SITE_DIST").unwrap_or_else(|_| "dist".into());
    if !std::path::Path::new(&dist).is_dir() {
        tracing::warn!("bundle directory '{}' not found - run `trunk build` first", dist);
    }

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new(&dist))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("serving {} on http://{}", dist, addr);
    axum::serve(listener, app).await?;

    Ok(())
}
