use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use super::errors::{ApiError, ApiResult};
use super::models::{
    FavoriteBody, FavoritesResponse, HealthResponse, MessageResponse, SearchBody, SearchResponse,
};
use crate::search::SearchService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub search: SearchService,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// POST /api/property/search
///
/// Filters, ranks (premium listers first) and paginates listings. An empty
/// match set is a successful response with no data.
pub async fn search_properties(
    State(state): State<AppState>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Json(body) = body?;
    let result = state
        .search
        .search(body.input, body.user_id.as_deref())
        .await?;

    info!(
        total_matches = result.total_matches,
        page = result.page.get(),
        "Search served"
    );
    Ok(Json(SearchResponse::from(result)))
}

/// GET /api/dashboard/favorites/:user_id
pub async fn get_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<FavoritesResponse>> {
    let favorites = state.search.favorites().favorites_of(&user_id).await?;
    Ok(Json(FavoritesResponse {
        success: true,
        favorites: favorites.sorted_ids(),
    }))
}

/// POST /api/dashboard/favorites/add/:user_id
pub async fn add_favorite(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<FavoriteBody>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let property_id = favorite_target(body)?;
    let added = state.search.favorites().add(&user_id, &property_id).await?;

    let message = if added {
        "Property added to favorites"
    } else {
        "Property already in favorites"
    };
    Ok(Json(MessageResponse::ok(message)))
}

/// POST /api/dashboard/favorites/remove/:user_id
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<FavoriteBody>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let property_id = favorite_target(body)?;
    let removed = state
        .search
        .favorites()
        .remove(&user_id, &property_id)
        .await?;

    let message = if removed {
        "Property removed from favorites"
    } else {
        "Property not in favorites"
    };
    Ok(Json(MessageResponse::ok(message)))
}

fn favorite_target(body: Result<Json<FavoriteBody>, JsonRejection>) -> ApiResult<String> {
    let Json(body) = body?;
    let property_id = body.property_id.trim();
    if property_id.is_empty() {
        return Err(ApiError::BadRequest("propertyId is required".to_string()));
    }
    Ok(property_id.to_string())
}
