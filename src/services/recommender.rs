use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, Recommendation},
};

/// Number of titles returned per lookup
pub const RECOMMENDATION_COUNT: usize = 5;

/// Nearest-neighbour lookup over the precomputed similarity matrix
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn contains(&self, title: &str) -> bool {
        self.catalog.movies().index_of(title).is_some()
    }

    /// All titles, in table order
    pub fn titles(&self) -> Vec<String> {
        self.catalog.movies().titles().map(str::to_string).collect()
    }

    /// Returns the most similar titles to `title`, best first
    ///
    /// The queried movie's own column is never part of the result. Equal
    /// scores are ordered by table position. With fewer than
    /// `RECOMMENDATION_COUNT + 1` movies the result is simply shorter.
    pub fn recommend(&self, title: &str) -> AppResult<Vec<Recommendation>> {
        let movies = self.catalog.movies();
        let index = movies
            .index_of(title)
            .ok_or_else(|| AppError::NotFound(format!("Unknown title: {}", title)))?;

        let row = self
            .catalog
            .similarity()
            .row(index)
            .ok_or_else(|| AppError::Internal(format!("No similarity row for index {}", index)))?;

        let mut ranked: Vec<(usize, f64)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|(j, _)| *j != index)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        ranked
            .into_iter()
            .take(RECOMMENDATION_COUNT)
            .map(|(j, score)| {
                let title = movies.title(j).ok_or_else(|| {
                    AppError::Internal(format!("No movie at index {}", j))
                })?;
                Ok(Recommendation {
                    title: title.to_string(),
                    score,
                })
            })
            .collect()
    }
}
