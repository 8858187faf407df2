use serde::Deserialize;

pub mod catalog;
pub mod recommendation;

pub use catalog::{Catalog, Movie, MovieTable, SimilarityMatrix};
pub use recommendation::{Recommendation, RecommendationView, RecommendationsResponse};

/// Public detail page for an IMDb identifier
pub fn imdb_url(imdb_id: &str) -> String {
    format!("https://www.imdb.com/title/{}/", imdb_id)
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response from GET /search/movie
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

/// One search hit
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Response from GET /movie/{id}/external_ids
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbExternalIds {
    #[serde(default)]
    pub imdb_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imdb_url() {
        assert_eq!(imdb_url("tt0133093"), "https://www.imdb.com/title/tt0133093/");
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 603, "title": "The Matrix", "release_date": "1999-03-30", "popularity": 80.1},
                {"id": 604, "title": "The Matrix Reloaded"}
            ],
            "total_results": 2
        }"#;

        let response: TmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].id, 603);
        assert_eq!(response.results[0].title.as_deref(), Some("The Matrix"));
        assert_eq!(response.results[1].release_date, None);
    }

    #[test]
    fn test_external_ids_with_null_imdb_id() {
        let ids: TmdbExternalIds =
            serde_json::from_str(r#"{"id": 1, "imdb_id": null, "wikidata_id": "Q1"}"#).unwrap();
        assert_eq!(ids.imdb_id, None);
    }
}
