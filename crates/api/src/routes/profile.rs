//! Route definitions for the profile.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Public routes mounted at `/profile`.
///
/// ```text
/// GET /  -> get_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(profile::get_profile))
}

/// Admin routes mounted at `/admin/profile`.
///
/// ```text
/// PUT /  -> upsert_profile
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", put(profile::upsert_profile))
}
