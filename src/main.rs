use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_recs::{
    api::{create_router, AppState},
    artifacts,
    config::Config,
    services::providers::{MetadataProvider, TmdbProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Startup is all-or-nothing: both artifacts must load before we serve.
    let catalog = artifacts::bootstrap(&config)
        .await
        .context("Failed to load artifacts")?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let metadata: Option<Arc<dyn MetadataProvider>> = match &config.tmdb_api_key {
        Some(api_key) => Some(Arc::new(TmdbProvider::new(
            http_client,
            api_key.clone(),
            config.tmdb_api_url.clone(),
        ))),
        None => {
            tracing::warn!("TMDB_API_KEY not set, IMDb links disabled");
            None
        }
    };

    let state = AppState::new(Arc::new(catalog), metadata);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(addr = %addr, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
