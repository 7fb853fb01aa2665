mod analysis;
mod catalog;
mod config;
mod errors;
mod human_reading;
mod llm_client;
mod matching;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::KeywordCatalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::aggregator::MatchEngine;
use crate::routes::build_router;
use crate::scoring::regions::RegionTiers;
use crate::scoring::similarity::EditDistanceSimilarity;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Match API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm_model.clone())?;
    info!("LLM client initialized (model: {})", llm.model());

    // Keyword vocabulary and region tiers: file overrides, built-ins otherwise
    let catalog = match &config.keyword_catalog_path {
        Some(path) => KeywordCatalog::load(path)?,
        None => KeywordCatalog::builtin(),
    };
    if catalog.is_empty() {
        warn!("Keyword catalog is empty; tag fields will always be empty");
    }
    info!(
        "Keyword catalog loaded: {} keywords in {} categories",
        catalog.len(),
        catalog.groups().len()
    );

    let regions = match &config.region_tiers_path {
        Some(path) => RegionTiers::load(path)?,
        None => RegionTiers::builtin(),
    };
    info!("Region tiers loaded: {} regions", regions.regions.len());

    let engine = MatchEngine::new(
        Arc::new(llm),
        Arc::new(catalog),
        Arc::new(regions),
        Arc::new(EditDistanceSimilarity::default()),
    );

    // Build app state
    let state = AppState {
        engine: Arc::new(engine),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the CRM frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
