/// Application routes configuration
use crate::handlers::{
    filter_launches, get_launch, get_launches, go_to_page, health, next_page, previous_page,
    AppState,
};
use axum::{routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Dashboard view
        .route("/launches", get(get_launches))
        .route("/launches/filter", get(filter_launches))
        .route("/launches/page/:page", get(go_to_page))
        .route("/launches/next", get(next_page))
        .route("/launches/previous", get(previous_page))
        // Detail overlay
        .route("/launches/:flight_number", get(get_launch))
        .with_state(state)
}
