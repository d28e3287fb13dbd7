//! Handlers for the services accordion.
//!
//! The admin form submits one "includes" line per input row, blank rows
//! included; lines are trimmed and blanks dropped before storing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_core::validation::normalize_includes;
use vitrine_db::models::service::{CreateService, UpdateService};
use vitrine_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/services
pub async fn list_services(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let services = state.content.services().await?;
    Ok(Json(DataResponse { data: services }))
}

/// GET /api/services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = state
        .content
        .service(service_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Service", service_id)))?;

    Ok(Json(DataResponse { data: service }))
}

/// POST /api/admin/services
pub async fn create_service(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(mut input): ValidatedJson<CreateService>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    input.includes = normalize_includes(input.includes);
    let service = ServiceRepo::create(pool, &input).await?;

    tracing::info!(service_id = service.id, title = %service.title, "Service created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// PUT /api/admin/services/{id}
pub async fn update_service(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<DbId>,
    ValidatedJson(mut input): ValidatedJson<UpdateService>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    input.includes = input.includes.map(normalize_includes);
    let service = ServiceRepo::update(pool, service_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Service", service_id)))?;

    tracing::info!(service_id, "Service updated");

    Ok(Json(DataResponse { data: service }))
}

/// DELETE /api/admin/services/{id}
pub async fn delete_service(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(service_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    if !ServiceRepo::delete(pool, service_id).await? {
        return Err(AppError::Core(CoreError::not_found("Service", service_id)));
    }

    tracing::info!(service_id, "Service deleted");

    Ok(StatusCode::NO_CONTENT)
}
