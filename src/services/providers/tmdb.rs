//! TMDB (The Movie Database) v3 API provider
//!
//! API Flow:
//! 1. Title Search: /search/movie?query=... → TMDB ID of the first hit
//! 2. Cross-reference: /movie/{tmdb_id}/external_ids → IMDb ID
//!
//! Both calls carry the API key as the `api_key` query parameter.
use crate::{
    error::{AppError, AppResult},
    models::{TmdbExternalIds, TmdbSearchResponse},
    services::providers::MetadataProvider,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issues a GET against the API and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize TMDB response"
            );
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn search_movie(&self, title: &str) -> AppResult<Option<u64>> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let search: TmdbSearchResponse = self
            .get_json("/search/movie", &[("query", title)])
            .await?;

        tracing::debug!(
            title = %title,
            results = search.results.len(),
            provider = "tmdb",
            "Title search completed"
        );

        Ok(search.results.first().map(|m| m.id))
    }

    async fn external_id(&self, catalog_id: u64) -> AppResult<Option<String>> {
        let path = format!("/movie/{}/external_ids", catalog_id);
        let ids: TmdbExternalIds = self.get_json(&path, &[]).await?;

        Ok(ids.imdb_id.filter(|id| !id.trim().is_empty()))
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
