//! Route definitions for services.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Public routes mounted at `/services`.
///
/// ```text
/// GET /      -> list_services
/// GET /{id}  -> get_service
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list_services))
        .route("/{id}", get(services::get_service))
}

/// Admin routes mounted at `/admin/services`.
///
/// ```text
/// POST   /      -> create_service
/// PUT    /{id}  -> update_service
/// DELETE /{id}  -> delete_service
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(services::create_service))
        .route(
            "/{id}",
            put(services::update_service).delete(services::delete_service),
        )
}
