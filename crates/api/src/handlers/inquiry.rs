//! Handler for the public contact form.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::inquiry::{format_inquiry, Inquiry};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/contact
///
/// Validate the inquiry and forward it to the site owner.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    ValidatedJson(inquiry): ValidatedJson<Inquiry>,
) -> AppResult<impl IntoResponse> {
    let text = format_inquiry(&inquiry);

    state.notifier.notify(&text).await.map_err(|e| {
        AppError::InternalError(format!("Inquiry delivery failed: {e}"))
    })?;

    tracing::info!(email = %inquiry.email.trim(), "Inquiry submitted");

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: "Your message has been sent".to_string(),
        },
    }))
}
