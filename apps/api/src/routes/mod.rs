pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::response_types::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/response-types",
            get(handlers::handle_list_response_types),
        )
        .route(
            "/api/v1/response-types/instructions",
            post(handlers::handle_post_instructions),
        )
        .route(
            "/api/v1/response-types/:name/instructions",
            get(handlers::handle_get_instructions),
        )
        .fallback(not_found)
        .with_state(state)
}
