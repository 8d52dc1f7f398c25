mod catalog;
mod chatbot;
mod config;
mod db;
mod eligibility;
mod errors;
mod llm_client;
mod models;
mod narrative;
mod routes;
mod scoring;
mod state;

#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::memory::InMemoryCatalog;
use crate::catalog::postgres::PgCatalog;
use crate::catalog::CatalogProvider;
use crate::config::{CatalogSource, Config};
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::narrative::llm::LlmNarrativeComposer;
use crate::narrative::rule_based::RuleBasedComposer;
use crate::narrative::NarrativeComposer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Eligibility API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = build_catalog(&config.catalog).await?;
    info!("Catalog backend: {}", catalog.backend());

    let composer: Arc<dyn NarrativeComposer> = match &config.openai_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.openai_api_url.clone())
                .context("Failed to build LLM HTTP client")?;
            info!("LLM narrative enabled (model: {})", llm_client::MODEL);
            Arc::new(LlmNarrativeComposer::new(llm))
        }
        None => {
            info!("OPENAI_API_KEY not configured; using rule-based narrative");
            Arc::new(RuleBasedComposer)
        }
    };

    info!(
        "Match policy: {} colleges, {} scholarships, course selection {:?}",
        config.college_result_limit, config.scholarship_result_limit, config.course_selection
    );

    let state = AppState {
        catalog,
        composer,
        config: config.clone(),
    };

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

/// Opens the configured catalog. A seed file next to a database URL is
/// imported into the database first.
async fn build_catalog(source: &CatalogSource) -> Result<Arc<dyn CatalogProvider>> {
    match source {
        CatalogSource::SeedFile(path) => Ok(Arc::new(InMemoryCatalog::from_path(path)?)),
        CatalogSource::Postgres {
            database_url,
            seed_path,
        } => {
            let pool = create_pool(database_url).await?;
            let catalog = PgCatalog::new(pool);
            if let Some(path) = seed_path {
                let seed = InMemoryCatalog::from_path(path)?;
                catalog
                    .seed(&seed)
                    .await
                    .context("Failed to import catalog seed")?;
            }
            Ok(Arc::new(catalog))
        }
    }
}
