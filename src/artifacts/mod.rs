//! Precomputed artifacts: the movie table and the similarity matrix
//!
//! Both are fetched into the model directory when absent, then loaded once
//! into an immutable [`Catalog`].

use std::path::Path;
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::Catalog,
};

pub mod fetch;
pub mod loader;

pub use fetch::{ArtifactSpec, ArtifactStore};
pub use loader::load_catalog;

pub const MOVIE_LIST_FILE: &str = "movie_list.json";
pub const SIMILARITY_FILE: &str = "similarity.json";

/// The two artifacts and their configured remote identifiers
pub fn artifact_specs(config: &Config) -> Vec<ArtifactSpec> {
    vec![
        ArtifactSpec::new(MOVIE_LIST_FILE, config.movie_list_id.clone()),
        ArtifactSpec::new(SIMILARITY_FILE, config.similarity_id.clone()),
    ]
}

/// Client for artifact downloads
///
/// Only connecting is bounded. A full-catalog matrix can take minutes to
/// stream, so the per-request `http_timeout_secs` used for metadata lookups
/// does not apply here.
pub fn download_client(config: &Config) -> AppResult<HttpClient> {
    Ok(HttpClient::builder()
        .connect_timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?)
}

/// Fetches any missing artifacts and loads the catalog
///
/// Any failure here is fatal to startup.
pub async fn bootstrap(config: &Config) -> AppResult<Catalog> {
    let store = ArtifactStore::new(
        download_client(config)?,
        &config.model_dir,
        config.artifact_url_template.clone(),
    );
    store.ensure_present(&artifact_specs(config)).await?;

    let dir = Path::new(&config.model_dir).to_path_buf();
    tokio::task::spawn_blocking(move || load_catalog(&dir))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
}
