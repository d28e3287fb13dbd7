//! Handler for admin login.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;
use vitrine_core::error::CoreError;

use crate::auth::jwt::generate_admin_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/admin/auth`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/admin/auth
///
/// Exchange the shared admin password for a Bearer token.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let Some(hash) = state.config.admin.password_hash.as_deref() else {
        tracing::warn!("Admin login attempted but no admin password is configured");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Admin login is not configured".into(),
        )));
    };

    let password_valid = verify_password(&input.password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!("Admin login failed: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let token = generate_admin_token(&state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!("Admin logged in");

    Ok(Json(DataResponse {
        data: AuthResponse {
            token,
            expires_in: state.config.jwt.expires_in_secs(),
        },
    }))
}
