//! Background video records.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitrine_core::error::CoreError;
use vitrine_core::types::{DbId, Timestamp};
use vitrine_core::validation::validate_http_url;
use vitrine_core::video::VideoStorageMode;

/// A row from the `video_files` table, without the inline payload column.
///
/// `file_path` is a server-side location and never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoFile {
    pub id: DbId,
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub file_size: i64,
    pub storage: String,
    #[serde(skip_serializing)]
    pub file_path: Option<String>,
    pub source_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl VideoFile {
    /// Parsed storage mode of this row.
    pub fn storage_mode(&self) -> Result<VideoStorageMode, CoreError> {
        VideoStorageMode::from_name(&self.storage)
    }
}

/// Insert payload built by the API after the bytes have been stored.
///
/// Exactly one of `file_path`, `source_url`, `data_base64` is set, matching
/// `storage`.
#[derive(Debug, Clone)]
pub struct CreateVideoFile {
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub file_size: i64,
    pub storage: VideoStorageMode,
    pub file_path: Option<String>,
    pub source_url: Option<String>,
    pub data_base64: Option<String>,
}

/// Request body registering an externally hosted video.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterVideoUrl {
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub original_name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub mime_type: Option<String>,
}
