//! Handlers for key/value site settings.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::validation::validate_setting_key;
use vitrine_db::models::setting::{SettingValue, UpsertSetting};
use vitrine_db::repositories::SettingRepo;

use crate::error::AppResult;
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/settings/{key}
///
/// Unset keys read as an empty value rather than 404.
pub async fn get_setting(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    validate_setting_key(&key)?;

    let setting = state
        .content
        .setting(&key)
        .await?
        .unwrap_or_else(|| SettingValue::unset(&key));

    Ok(Json(DataResponse { data: setting }))
}

/// PUT /api/admin/settings/{key}
pub async fn upsert_setting(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
    ValidatedJson(input): ValidatedJson<UpsertSetting>,
) -> AppResult<impl IntoResponse> {
    validate_setting_key(&key)?;
    let pool = state.writable_db()?;

    let setting = SettingRepo::upsert(pool, &key, &input.value).await?;

    tracing::info!(key = %setting.key, "Setting updated");

    Ok(Json(DataResponse {
        data: SettingValue::from(setting),
    }))
}
