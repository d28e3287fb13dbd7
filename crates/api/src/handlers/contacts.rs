//! Handlers for the public contact links.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_db::models::contact::UpsertContacts;
use vitrine_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/contacts
pub async fn get_contacts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let contacts = state
        .content
        .contacts()
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Contacts", 1)))?;

    Ok(Json(DataResponse { data: contacts }))
}

/// PUT /api/admin/contacts
///
/// Replace both links; an omitted link is cleared.
pub async fn upsert_contacts(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpsertContacts>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    let contacts = ContactRepo::upsert(pool, &input).await?;

    tracing::info!(
        has_telegram = contacts.telegram.is_some(),
        has_github = contacts.github.is_some(),
        "Contacts updated",
    );

    Ok(Json(DataResponse { data: contacts }))
}
