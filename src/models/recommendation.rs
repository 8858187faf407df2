use serde::{Deserialize, Serialize};

/// A recommended movie and its similarity to the queried title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub score: f64,
}

/// A recommendation annotated with its IMDb link, if one was resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationView {
    pub title: String,
    pub score: f64,
    pub imdb_url: Option<String>,
}

impl RecommendationView {
    pub fn new(recommendation: Recommendation, imdb_url: Option<String>) -> Self {
        Self {
            title: recommendation.title,
            score: recommendation.score,
            imdb_url,
        }
    }
}

/// Response body of the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub title: String,
    pub recommendations: Vec<RecommendationView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_link_serializes_as_null() {
        let view = RecommendationView::new(
            Recommendation {
                title: "Alien".to_string(),
                score: 0.75,
            },
            None,
        );

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["title"], "Alien");
        assert_eq!(json["score"], 0.75);
        assert!(json["imdb_url"].is_null());
    }
}
