use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{AppError, AppResult};

/// One record of the movie table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    #[serde(alias = "Title")]
    pub title: String,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Ordered movie table with an exact-title lookup index
///
/// Positions are the row/column indices of the similarity matrix. When a
/// title appears more than once, lookups resolve to its first position.
#[derive(Debug, Clone)]
pub struct MovieTable {
    movies: Vec<Movie>,
    positions: HashMap<String, usize>,
}

impl MovieTable {
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut positions = HashMap::with_capacity(movies.len());
        for (index, movie) in movies.iter().enumerate() {
            positions.entry(movie.title.clone()).or_insert(index);
        }

        Self { movies, positions }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Position of the first movie with exactly this title
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.movies.get(index).map(|m| m.title.as_str())
    }

    /// All titles in table order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }
}

/// Dense N×N similarity scores, stored row-major
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    scores: Vec<f64>,
    dimension: usize,
}

impl SimilarityMatrix {
    /// Builds the matrix from its rows, rejecting anything that is not square
    pub fn from_rows(rows: Vec<Vec<f64>>) -> AppResult<Self> {
        let dimension = rows.len();
        let mut scores = Vec::with_capacity(dimension * dimension);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dimension {
                return Err(AppError::Artifact(format!(
                    "similarity matrix row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    dimension
                )));
            }
            scores.extend(row);
        }

        Ok(Self { scores, dimension })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.dimension {
            return None;
        }
        let start = index * self.dimension;
        Some(&self.scores[start..start + self.dimension])
    }
}

/// The loaded artifacts, validated against each other
///
/// Built once at startup and shared read-only for the rest of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: MovieTable,
    similarity: SimilarityMatrix,
}

impl Catalog {
    pub fn new(movies: MovieTable, similarity: SimilarityMatrix) -> AppResult<Self> {
        if movies.len() != similarity.dimension() {
            return Err(AppError::Artifact(format!(
                "movie table has {} entries but similarity matrix is {}x{}",
                movies.len(),
                similarity.dimension(),
                similarity.dimension()
            )));
        }

        Ok(Self { movies, similarity })
    }

    /// Convenience constructor used by tests and fixtures
    pub fn from_parts(titles: &[&str], rows: Vec<Vec<f64>>) -> AppResult<Self> {
        let movies = MovieTable::new(titles.iter().map(|t| Movie::new(*t)).collect());
        Self::new(movies, SimilarityMatrix::from_rows(rows)?)
    }

    pub fn movies(&self) -> &MovieTable {
        &self.movies
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_accepts_capitalised_title_field() {
        let movie: Movie = serde_json::from_str(r#"{"Title": "Heat", "year": 1995}"#).unwrap();
        assert_eq!(movie.title, "Heat");

        let movie: Movie = serde_json::from_str(r#"{"title": "Ronin"}"#).unwrap();
        assert_eq!(movie.title, "Ronin");
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first_position() {
        let table = MovieTable::new(vec![
            Movie::new("Solaris"),
            Movie::new("Stalker"),
            Movie::new("Solaris"),
        ]);
        assert_eq!(table.index_of("Solaris"), Some(0));
        assert_eq!(table.index_of("Stalker"), Some(1));
        assert_eq!(table.index_of("Mirror"), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_matrix_rows_are_sliced_row_major() {
        let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.25, 1.0]]).unwrap();
        assert_eq!(matrix.dimension(), 2);
        assert_eq!(matrix.row(0), Some(&[1.0, 0.5][..]));
        assert_eq!(matrix.row(1), Some(&[0.25, 1.0][..]));
        assert_eq!(matrix.row(2), None);
    }

    #[test]
    fn test_ragged_matrix_is_rejected() {
        let result = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.25]]);
        assert!(matches!(result, Err(AppError::Artifact(_))));
    }

    #[test]
    fn test_catalog_rejects_dimension_mismatch() {
        let result = Catalog::from_parts(&["A", "B", "C"], vec![vec![1.0, 0.5], vec![0.5, 1.0]]);
        assert!(matches!(result, Err(AppError::Artifact(_))));
    }

    #[test]
    fn test_empty_catalog_is_consistent() {
        let catalog = Catalog::from_parts(&[], vec![]).unwrap();
        assert!(catalog.movies().is_empty());
        assert_eq!(catalog.similarity().dimension(), 0);
    }
}
