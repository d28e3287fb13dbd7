//! Handlers for the portfolio gallery.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_db::models::portfolio::{CreatePortfolioItem, UpdatePortfolioItem};
use vitrine_db::repositories::PortfolioRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/portfolio
pub async fn list_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.content.portfolio().await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/portfolio/{id}
pub async fn get_item(
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = state
        .content
        .portfolio_item(item_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("PortfolioItem", item_id)))?;

    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// POST /api/admin/portfolio
pub async fn create_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePortfolioItem>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    let item = PortfolioRepo::create(pool, &input).await?;

    tracing::info!(item_id = item.id, title = %item.title, "Portfolio item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/admin/portfolio/{id}
///
/// Partially update an item; omitted fields keep their values.
pub async fn update_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePortfolioItem>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    let item = PortfolioRepo::update(pool, item_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("PortfolioItem", item_id)))?;

    tracing::info!(item_id, "Portfolio item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/admin/portfolio/{id}
pub async fn delete_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    let deleted = PortfolioRepo::delete(pool, item_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("PortfolioItem", item_id)));
    }

    tracing::info!(item_id, "Portfolio item deleted");

    Ok(StatusCode::NO_CONTENT)
}
