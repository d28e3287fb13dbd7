use axum::routing::{get, put};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Public routes mounted at `/contacts`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(contacts::get_contacts))
}

/// Admin routes mounted at `/admin/contacts`.
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", put(contacts::upsert_contacts))
}
