//! HTTP boundary of the search service.

pub mod errors;
pub mod handlers;
pub mod models;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use handlers::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/property/search", post(handlers::search_properties))
        .route("/api/dashboard/favorites/:user_id", get(handlers::get_favorites))
        .route(
            "/api/dashboard/favorites/add/:user_id",
            post(handlers::add_favorite),
        )
        .route(
            "/api/dashboard/favorites/remove/:user_id",
            post(handlers::remove_favorite),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
