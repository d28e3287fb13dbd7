//! Handlers for background videos.
//!
//! Uploads arrive as `multipart/form-data` with the bytes in a `video` field.
//! The request body limit is lifted on that route and the size is enforced
//! here while reading, so oversize uploads answer 413 without buffering the
//! whole body.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_core::video::{check_upload_size, guess_mime_from_url};
use vitrine_db::models::video_file::RegisterVideoUrl;
use vitrine_db::repositories::VideoFileRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::video_store::VideoUpload;

/// Multipart field holding the uploaded bytes.
const UPLOAD_FIELD: &str = "video";

/// Original name recorded when the client sends none.
const DEFAULT_UPLOAD_NAME: &str = "upload.mp4";

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/videos
pub async fn list_videos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let videos = state.content.videos().await?;
    Ok(Json(DataResponse { data: videos }))
}

/// GET /api/videos/active
pub async fn get_active_video(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let video = state
        .content
        .active_video()
        .await?
        .ok_or(AppError::Core(CoreError::not_found("VideoFile", "active")))?;

    Ok(Json(DataResponse { data: video }))
}

/// GET /api/videos/{id}/content
///
/// Video bytes for stored uploads, or a temporary redirect for URL videos.
pub async fn get_video_content(
    State(state): State<AppState>,
    ApiPath(video_id): ApiPath<DbId>,
) -> AppResult<Response> {
    let video = state
        .content
        .video(video_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("VideoFile", video_id)))?;

    state.videos.serve(state.pool.as_ref(), &video).await
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// POST /api/admin/videos/upload
pub async fn upload_video(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;
    state.videos.ensure_accepts_uploads()?;
    let mut multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let limit = state.videos.max_upload_bytes();
    let mut upload: Option<VideoUpload> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let original_name = field
            .file_name()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_UPLOAD_NAME)
            .to_string();
        let mime_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| guess_mime_from_url(&original_name).to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            check_upload_size((data.len() + chunk.len()) as u64, limit)?;
            data.extend_from_slice(&chunk);
        }

        upload = Some(VideoUpload {
            original_name,
            mime_type,
            data,
        });
        break;
    }

    let upload = upload.ok_or_else(|| {
        AppError::BadRequest(format!("Missing required '{UPLOAD_FIELD}' field"))
    })?;

    let row = state.videos.store(upload).await?;
    let video = match VideoFileRepo::create(pool, &row).await {
        Ok(video) => video,
        Err(e) => {
            if let Some(path) = row.file_path.as_deref() {
                if let Err(remove_err) = tokio::fs::remove_file(path).await {
                    tracing::warn!(path, error = %remove_err, "Failed to remove orphaned upload");
                }
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        video_id = video.id,
        file_name = %video.file_name,
        file_size = video.file_size,
        storage = %video.storage,
        "Video uploaded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// POST /api/admin/videos
///
/// Register an externally hosted video.
pub async fn register_video_url(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterVideoUrl>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    let row = state.videos.register_url(&input);
    let video = VideoFileRepo::create(pool, &row).await?;

    tracing::info!(video_id = video.id, url = %input.url, "Video URL registered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// PUT /api/admin/videos/{id}/activate
///
/// Make this the only active background video.
pub async fn activate_video(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(video_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    let video = VideoFileRepo::activate(pool, video_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("VideoFile", video_id)))?;

    tracing::info!(video_id, "Background video activated");

    Ok(Json(DataResponse { data: video }))
}

/// DELETE /api/admin/videos/{id}
///
/// Delete the record and its stored bytes.
pub async fn delete_video(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(video_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let pool = state.writable_db()?;

    let video = VideoFileRepo::delete(pool, video_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("VideoFile", video_id)))?;

    state.videos.discard(&video).await;

    tracing::info!(video_id, was_active = video.is_active, "Video deleted");

    Ok(StatusCode::NO_CONTENT)
}
