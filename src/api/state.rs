use std::sync::Arc;

use crate::{
    models::Catalog,
    services::{providers::MetadataProvider, Recommender},
};

/// Shared application state
///
/// Everything in here is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    /// IMDb link lookups; `None` when no API key is configured
    pub metadata: Option<Arc<dyn MetadataProvider>>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, metadata: Option<Arc<dyn MetadataProvider>>) -> Self {
        Self {
            recommender: Recommender::new(catalog),
            metadata,
        }
    }
}
