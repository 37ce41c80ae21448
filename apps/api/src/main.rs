mod catalog;
mod coach;
mod config;
mod errors;
mod interview;
mod models;
mod normalize;
mod proxy;
mod resume;
mod routes;
mod scoring;
mod session;
mod state;
mod upstream;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::scoring::compatibility::HeuristicScorer;
use crate::session::FileSessionStore;
use crate::state::AppState;
use crate::upstream::UpstreamClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Nole Coach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize upstream client
    let upstream = UpstreamClient::new(
        config.upstream_base_url.clone(),
        config.upstream_user_id.clone(),
        config.upstream_timeout,
    )
    .context("Failed to build upstream HTTP client")?;
    info!(
        "Upstream client initialized ({}, bounded timeout {:?})",
        config.upstream_base_url, config.upstream_timeout
    );

    // Initialize session store
    let store = FileSessionStore::new(config.data_dir.clone());
    info!("Session store at {}", store.dir().display());

    let catalog = Catalog::seeded();
    info!(
        "Catalog loaded: {} listings, {} mentors",
        catalog.jobs(false).len(),
        catalog.mentors().len()
    );

    // Build app state
    let state = AppState {
        upstream,
        scorer: Arc::new(HeuristicScorer),
        catalog: Arc::new(catalog),
        store: Arc::new(store),
        store_lock: Arc::default(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
