//! Pokedex Engine - Main entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_engine::api::{self, cors::AllowedOrigins};
use pokedex_engine::infrastructure::{
    pokeapi::{PokeApiClient, DEFAULT_POKEAPI_BASE_URL},
    resilient_pokeapi::{ResilientPokeApiClient, RetryPolicy},
};
use pokedex_engine::use_cases::CatalogConfig;
use pokedex_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_files = load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(?env_files, "Starting Pokedex Engine");

    // Load configuration
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);

    let mut catalog_config = CatalogConfig::default();
    if let Some(max) = std::env::var("HYDRATION_CONCURRENCY")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
    {
        catalog_config = catalog_config.with_max_concurrent_hydrations(max);
    }

    // Create upstream client
    let retry_policy = RetryPolicy::default();
    tracing::info!(
        base_url = DEFAULT_POKEAPI_BASE_URL,
        max_attempts = retry_policy.max_attempts,
        delay_ms = retry_policy.delay.as_millis() as u64,
        max_concurrent_hydrations = catalog_config.max_concurrent_hydrations,
        "PokeAPI client configured"
    );
    let pokeapi = Arc::new(PokeApiClient::default());
    let upstream = Arc::new(ResilientPokeApiClient::new(pokeapi, retry_policy));

    // Create application
    let app = Arc::new(App::new(upstream, catalog_config));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .and_then(|raw| AllowedOrigins::parse(&raw));
    match allowed_origins {
        Some(origins) => {
            tracing::info!(?origins, "CORS enabled");
            router = router.layer(origins.into_layer());
        }
        None => tracing::info!("CORS disabled, set CORS_ALLOWED_ORIGINS to enable"),
    }

    // Start server
    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Load `.env.local` then `.env`, searching upward from the working directory.
///
/// Variables already set win over both files, and `.env.local` wins over
/// `.env`. Returns the files that were read.
fn load_env_files() -> Vec<PathBuf> {
    [".env.local", ".env"]
        .into_iter()
        .filter_map(|name| dotenvy::from_filename(name).ok())
        .collect()
}
