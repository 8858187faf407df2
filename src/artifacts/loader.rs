use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    artifacts::{MOVIE_LIST_FILE, SIMILARITY_FILE},
    error::{AppError, AppResult},
    models::{Catalog, Movie, MovieTable, SimilarityMatrix},
};

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let file = File::open(path).map_err(|e| {
        AppError::Artifact(format!("failed to open {}: {}", path.display(), e))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::Artifact(format!("failed to deserialize {}: {}", path.display(), e))
    })
}

/// Loads and cross-validates both artifacts from `dir`
pub fn load_catalog(dir: &Path) -> AppResult<Catalog> {
    let movies: Vec<Movie> = read_json(&dir.join(MOVIE_LIST_FILE))?;
    let rows: Vec<Vec<f64>> = read_json(&dir.join(SIMILARITY_FILE))?;

    let catalog = Catalog::new(MovieTable::new(movies), SimilarityMatrix::from_rows(rows)?)?;

    tracing::info!(
        movies = catalog.movies().len(),
        dir = %dir.display(),
        "Catalog loaded"
    );

    Ok(catalog)
}
