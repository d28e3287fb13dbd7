//! Storage of background video bytes.
//!
//! The configured [`VideoStorageMode`] decides where new uploads go. Serving
//! follows the mode recorded on each row, so rows written under an earlier
//! configuration keep working.

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use vitrine_core::error::CoreError;
use vitrine_core::video::{
    check_upload_size, guess_mime_from_url, is_video_mime, stored_file_name, VideoStorageMode,
    DEFAULT_MAX_UPLOAD_BYTES,
};
use vitrine_db::models::video_file::{CreateVideoFile, RegisterVideoUrl, VideoFile};
use vitrine_db::repositories::VideoFileRepo;
use vitrine_db::DbPool;

use crate::error::{AppError, AppResult};

/// Default upload directory, relative to the working directory.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads/videos";

/// Cache lifetime for served video bytes.
const CACHE_CONTROL_VALUE: &str = "public, max-age=86400";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Video storage settings.
#[derive(Debug, Clone)]
pub struct VideoConfig {
    pub storage: VideoStorageMode,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: u64,
}

impl VideoConfig {
    /// Load from environment variables.
    ///
    /// | Env Var                  | Default          |
    /// |--------------------------|------------------|
    /// | `VIDEO_STORAGE`          | `filesystem`     |
    /// | `VIDEO_UPLOAD_DIR`       | `uploads/videos` |
    /// | `VIDEO_MAX_UPLOAD_BYTES` | `104857600`      |
    pub fn from_env() -> Self {
        let storage = VideoStorageMode::from_name(
            &std::env::var("VIDEO_STORAGE").unwrap_or_else(|_| "filesystem".into()),
        )
        .unwrap_or_else(|e| panic!("{e}"));

        let upload_dir =
            PathBuf::from(std::env::var("VIDEO_UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.into()));

        let max_upload_bytes: u64 = std::env::var("VIDEO_MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("VIDEO_MAX_UPLOAD_BYTES must be a valid u64");

        Self {
            storage,
            upload_dir,
            max_upload_bytes,
        }
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// An uploaded video, fully read from the request.
#[derive(Debug)]
pub struct VideoUpload {
    pub original_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Keeps and serves video bytes according to a [`VideoStorageMode`].
#[derive(Debug, Clone)]
pub struct VideoStore {
    mode: VideoStorageMode,
    upload_dir: PathBuf,
    max_upload_bytes: u64,
}

impl VideoStore {
    pub fn new(config: &VideoConfig) -> Self {
        Self {
            mode: config.storage,
            upload_dir: config.upload_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    /// Fail early when the configured mode does not take uploads.
    pub fn ensure_accepts_uploads(&self) -> AppResult<()> {
        if self.mode.accepts_uploads() {
            return Ok(());
        }
        Err(uploads_disabled())
    }

    /// Keep the uploaded bytes and return the row to insert.
    pub async fn store(&self, upload: VideoUpload) -> AppResult<CreateVideoFile> {
        self.ensure_accepts_uploads()?;

        if !is_video_mime(&upload.mime_type) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Only video files can be uploaded, got '{}'",
                upload.mime_type
            ))));
        }
        check_upload_size(upload.data.len() as u64, self.max_upload_bytes)?;

        let file_name = stored_file_name(
            &upload.original_name,
            chrono::Utc::now().timestamp_millis(),
            rand::random::<u32>(),
        );
        let file_size = upload.data.len() as i64;

        let mut row = CreateVideoFile {
            file_name: file_name.clone(),
            original_name: upload.original_name,
            mime_type: upload.mime_type,
            file_size,
            storage: self.mode,
            file_path: None,
            source_url: None,
            data_base64: None,
        };

        match self.mode {
            VideoStorageMode::Filesystem => {
                tokio::fs::create_dir_all(&self.upload_dir)
                    .await
                    .map_err(|e| AppError::InternalError(format!("Create upload dir: {e}")))?;
                let path = self.upload_dir.join(&file_name);
                tokio::fs::write(&path, &upload.data)
                    .await
                    .map_err(|e| AppError::InternalError(format!("Write video file: {e}")))?;
                row.file_path = Some(path.to_string_lossy().to_string());
            }
            VideoStorageMode::Inline => {
                row.data_base64 = Some(BASE64.encode(&upload.data));
            }
            VideoStorageMode::Url => return Err(uploads_disabled()),
        }

        Ok(row)
    }

    /// Build the row for an externally hosted video. Works in every mode.
    pub fn register_url(&self, input: &RegisterVideoUrl) -> CreateVideoFile {
        let url = input.url.trim().to_string();
        let file_name = url
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .filter(|segment| !segment.is_empty())
            .unwrap_or("video")
            .to_string();

        CreateVideoFile {
            original_name: input.original_name.clone().unwrap_or_else(|| file_name.clone()),
            mime_type: input
                .mime_type
                .clone()
                .unwrap_or_else(|| guess_mime_from_url(&url).to_string()),
            file_name,
            file_size: 0,
            storage: VideoStorageMode::Url,
            file_path: None,
            source_url: Some(url),
            data_base64: None,
        }
    }

    /// Respond with the bytes of `video`, or redirect to its source URL.
    pub async fn serve(&self, pool: Option<&DbPool>, video: &VideoFile) -> AppResult<Response> {
        let mode = video
            .storage_mode()
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        match mode {
            VideoStorageMode::Filesystem => {
                let path = video
                    .file_path
                    .as_deref()
                    .ok_or_else(|| not_found(video))?;
                serve_file(Path::new(path), &video.mime_type)
                    .await?
                    .ok_or_else(|| not_found(video))
            }
            VideoStorageMode::Inline => {
                let pool = pool.ok_or_else(|| {
                    AppError::InternalError("No database pool for inline video".into())
                })?;
                let encoded = VideoFileRepo::find_inline_data(pool, video.id)
                    .await?
                    .ok_or_else(|| not_found(video))?;
                let data = BASE64
                    .decode(encoded.as_bytes())
                    .map_err(|e| AppError::InternalError(format!("Decode inline video: {e}")))?;
                bytes_response(data, &video.mime_type)
            }
            VideoStorageMode::Url => {
                let url = video.source_url.as_deref().ok_or_else(|| not_found(video))?;
                Ok(Redirect::temporary(url).into_response())
            }
        }
    }

    /// Remove stored bytes of a deleted row. Failures are logged only.
    pub async fn discard(&self, video: &VideoFile) {
        if video.storage != VideoStorageMode::Filesystem.name() {
            return;
        }
        let Some(path) = video.file_path.as_deref() else {
            return;
        };
        match tokio::fs::remove_file(path).await {
            Ok(()) => tracing::debug!(video_id = video.id, path, "Video file removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(video_id = video.id, path, error = %e, "Failed to remove video file")
            }
        }
    }
}

fn uploads_disabled() -> AppError {
    AppError::Core(CoreError::Conflict(
        "Video uploads are disabled; register a video URL instead".into(),
    ))
}

fn not_found(video: &VideoFile) -> AppError {
    AppError::Core(CoreError::not_found("VideoFile", video.id))
}

/// Stream a file from disk. `None` when the file is missing.
async fn serve_file(path: &Path, mime_type: &str) -> AppResult<Option<Response>> {
    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(AppError::InternalError(format!("Open video file: {e}"))),
    };
    let file_size = file
        .metadata()
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .len();

    let stream = tokio_util::io::ReaderStream::new(file);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type)
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .header(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)
        .body(Body::from_stream(stream))
        .map(Some)
        .map_err(|e| AppError::InternalError(e.to_string()))
}

fn bytes_response(data: Vec<u8>, mime_type: &str) -> AppResult<Response> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type)
        .header(header::CONTENT_LENGTH, data.len().to_string())
        .header(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)
        .body(Body::from(data))
        .map_err(|e| AppError::InternalError(e.to_string()))
}
