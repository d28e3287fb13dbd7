//! Repository for the `video_files` table.
//!
//! The `data_base64` column can be large, so it is only read through
//! [`VideoFileRepo::find_inline_data`].

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::video_file::{CreateVideoFile, VideoFile};

/// Column list for `video_files` queries (payload column excluded).
const COLUMNS: &str = "\
    id, file_name, original_name, mime_type, file_size, storage, file_path, \
    source_url, is_active, created_at, updated_at";

/// Provides CRUD and activation operations for background videos.
pub struct VideoFileRepo;

impl VideoFileRepo {
    /// List all videos, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<VideoFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_files ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, VideoFile>(&query).fetch_all(pool).await
    }

    /// Find a video by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VideoFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_files WHERE id = $1");
        sqlx::query_as::<_, VideoFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The currently active background video, if any.
    pub async fn find_active(pool: &PgPool) -> Result<Option<VideoFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_files WHERE is_active");
        sqlx::query_as::<_, VideoFile>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new (inactive) video record.
    pub async fn create(pool: &PgPool, dto: &CreateVideoFile) -> Result<VideoFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO video_files \
                 (file_name, original_name, mime_type, file_size, storage, \
                  file_path, source_url, data_base64) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoFile>(&query)
            .bind(&dto.file_name)
            .bind(&dto.original_name)
            .bind(&dto.mime_type)
            .bind(dto.file_size)
            .bind(dto.storage.name())
            .bind(&dto.file_path)
            .bind(&dto.source_url)
            .bind(&dto.data_base64)
            .fetch_one(pool)
            .await
    }

    /// Read the base64 payload of an inline-stored video.
    pub async fn find_inline_data(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let data = sqlx::query_scalar::<_, Option<String>>(
            "SELECT data_base64 FROM video_files WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(data.flatten())
    }

    /// Make `id` the only active video.
    ///
    /// Runs in a transaction: every other row is deactivated first, and
    /// nothing changes when `id` does not exist.
    pub async fn activate(pool: &PgPool, id: DbId) -> Result<Option<VideoFile>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE video_files SET is_active = false WHERE is_active AND id <> $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let query =
            format!("UPDATE video_files SET is_active = true WHERE id = $1 RETURNING {COLUMNS}");
        let activated = sqlx::query_as::<_, VideoFile>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if activated.is_some() {
            tx.commit().await?;
        } else {
            tracing::debug!(video_id = id, "Activation target missing, rolling back");
            tx.rollback().await?;
        }
        Ok(activated)
    }

    /// Delete a video record, returning the removed row so stored bytes can
    /// be discarded.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<VideoFile>, sqlx::Error> {
        let query = format!("DELETE FROM video_files WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, VideoFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
