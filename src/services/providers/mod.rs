//! External movie metadata abstraction
//!
//! A provider resolves a display title to an external cross-reference (an
//! IMDb identifier) in two steps: a text search against its own catalog, then
//! a lookup of the external IDs recorded for the best hit.

use crate::{error::AppResult, models::imdb_url};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search the provider's catalog by title
    ///
    /// Returns the provider-specific ID of the first match, or `None` when the
    /// search has no results.
    async fn search_movie(&self, title: &str) -> AppResult<Option<u64>>;

    /// Fetch the IMDb ID recorded for a provider-specific ID
    async fn external_id(&self, catalog_id: u64) -> AppResult<Option<String>>;

    /// Resolve a title to its public IMDb page
    ///
    /// Chains `search_movie` and `external_id`; `None` if either yields nothing.
    async fn imdb_link(&self, title: &str) -> AppResult<Option<String>> {
        let Some(catalog_id) = self.search_movie(title).await? else {
            tracing::debug!(title = %title, provider = self.name(), "No search results");
            return Ok(None);
        };

        let link = self.external_id(catalog_id).await?.map(|id| imdb_url(&id));
        if link.is_none() {
            tracing::debug!(title = %title, catalog_id, provider = self.name(), "No IMDb ID recorded");
        }

        Ok(link)
    }

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
