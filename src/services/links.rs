use crate::{
    models::{Recommendation, RecommendationView},
    services::providers::MetadataProvider,
};

/// Annotates recommendations with IMDb links
///
/// Titles are resolved one after another. A failed or empty lookup leaves only
/// that entry without a link; the list itself is always returned in full.
pub async fn resolve_links(
    provider: Option<&dyn MetadataProvider>,
    recommendations: Vec<Recommendation>,
) -> Vec<RecommendationView> {
    let Some(provider) = provider else {
        return recommendations
            .into_iter()
            .map(|rec| RecommendationView::new(rec, None))
            .collect();
    };

    let mut views = Vec::with_capacity(recommendations.len());
    for rec in recommendations {
        let link = match provider.imdb_link(&rec.title).await {
            Ok(link) => link,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    title = %rec.title,
                    provider = provider.name(),
                    "IMDb link lookup failed"
                );
                None
            }
        };
        views.push(RecommendationView::new(rec, link));
    }

    let resolved = views.iter().filter(|v| v.imdb_url.is_some()).count();
    tracing::debug!(
        resolved,
        total = views.len(),
        provider = provider.name(),
        "IMDb links resolved"
    );

    views
}
