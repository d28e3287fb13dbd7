//! Handlers for the site owner profile.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_db::models::profile::UpsertProfile;
use vitrine_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = state
        .content
        .profile()
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Profile", 1)))?;

    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/admin/profile
///
/// Replace the profile text, creating it on first write.
pub async fn upsert_profile(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpsertProfile>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    let profile = ProfileRepo::upsert(pool, &input).await?;

    tracing::info!(first_name = %profile.first_name, "Profile updated");

    Ok(Json(DataResponse { data: profile }))
}
