use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{book_page, health, profile_page, register_action};
use crate::state::AppState;

/// Create the HTTP router with all page-data and form-action routes.
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/book", get(book_page))
        .route("/profile", get(profile_page))
        .route("/register", post(register_action))
        .layer(cors)
        .with_state(state)
}
