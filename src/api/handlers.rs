use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{RecommendationView, RecommendationsResponse},
    services::resolve_links,
};

use super::page::{render_page, PageOutput};
use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub movie: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: Option<String>,
}

/// Recommends for `title` and annotates the result with IMDb links
async fn recommend_with_links(
    state: &AppState,
    title: &str,
) -> AppResult<Vec<RecommendationView>> {
    let recommendations = state.recommender.recommend(title)?;
    Ok(resolve_links(state.metadata.as_deref(), recommendations).await)
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Single-page UI
///
/// Without a `movie` parameter only the picker is shown. With one, the
/// recommendations for it are rendered below the picker.
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<PageQuery>,
) -> Response {
    let catalog = state.recommender.catalog();
    let titles = catalog.movies().titles();

    let Some(movie) = query.movie.filter(|m| !m.is_empty()) else {
        return Html(render_page(titles, None, PageOutput::Empty)).into_response();
    };

    match recommend_with_links(&state, &movie).await {
        Ok(views) => {
            tracing::info!(
                request_id = %request_id,
                title = %movie,
                count = views.len(),
                "Rendered recommendations"
            );
            Html(render_page(
                titles,
                Some(movie.as_str()),
                PageOutput::Recommendations(&views),
            ))
            .into_response()
        }
        Err(e @ AppError::NotFound(_)) => {
            tracing::info!(request_id = %request_id, title = %movie, "Unknown title requested");
            let output = PageOutput::UnknownTitle(&movie);
            (e.status(), Html(render_page(titles, None, output))).into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Recommendation failed");
            e.into_response()
        }
    }
}

/// Get all movie titles, in catalog order
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.recommender.titles())
}

/// Get the recommendations for one title
pub async fn recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    let title = query
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("title cannot be empty".to_string()))?;

    tracing::info!(
        request_id = %request_id,
        title = %title,
        "Processing recommendation request"
    );

    let views = recommend_with_links(&state, &title).await?;

    tracing::info!(
        request_id = %request_id,
        count = views.len(),
        "Recommendations completed"
    );

    Ok(Json(RecommendationsResponse {
        title,
        recommendations: views,
    }))
}
