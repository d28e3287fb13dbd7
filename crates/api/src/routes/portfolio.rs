//! Route definitions for the portfolio gallery.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Public routes mounted at `/portfolio`.
///
/// ```text
/// GET /      -> list_items
/// GET /{id}  -> get_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::list_items))
        .route("/{id}", get(portfolio::get_item))
}

/// Admin routes mounted at `/admin/portfolio`.
///
/// ```text
/// POST   /      -> create_item
/// PUT    /{id}  -> update_item
/// DELETE /{id}  -> delete_item
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(portfolio::create_item))
        .route(
            "/{id}",
            put(portfolio::update_item).delete(portfolio::delete_item),
        )
}
