//! Route definitions for background videos.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Public routes mounted at `/videos`.
///
/// ```text
/// GET /                -> list_videos
/// GET /active          -> get_active_video
/// GET /{id}/content    -> get_video_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::list_videos))
        .route("/active", get(videos::get_active_video))
        .route("/{id}/content", get(videos::get_video_content))
}

/// Admin routes mounted at `/admin/videos`.
///
/// ```text
/// POST   /                -> register_video_url
/// POST   /upload          -> upload_video (no body limit; size checked while reading)
/// PUT    /{id}/activate   -> activate_video
/// DELETE /{id}            -> delete_video
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(videos::register_video_url))
        .route(
            "/upload",
            post(videos::upload_video).layer(DefaultBodyLimit::disable()),
        )
        .route("/{id}/activate", put(videos::activate_video))
        .route("/{id}", delete(videos::delete_video))
}
