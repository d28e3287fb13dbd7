//! Admin token extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use vitrine_core::error::CoreError;

use crate::auth::jwt::{validate_token, Claims, ADMIN_SUBJECT};
use crate::error::AppError;
use crate::state::AppState;

/// Requires `Authorization: Bearer <token>` carrying a valid admin token.
/// Rejects with 401 Unauthorized otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(claims): RequireAdmin) -> AppResult<Json<()>> {
///     tracing::info!(token_id = %claims.jti, "handling admin request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Claims);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token.trim(), &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if claims.sub != ADMIN_SUBJECT {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Token does not grant admin access".into(),
            )));
        }

        Ok(RequireAdmin(claims))
    }
}
