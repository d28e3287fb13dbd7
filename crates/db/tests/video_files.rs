//! Integration tests for background video records.
//!
//! - Storage-specific columns are enforced by a check constraint
//! - `activate` leaves exactly one active row
//! - Activating an unknown id changes nothing
//! - Inline payloads are only read through `find_inline_data`

use sqlx::PgPool;
use vitrine_core::video::VideoStorageMode;
use vitrine_db::models::video_file::CreateVideoFile;
use vitrine_db::repositories::VideoFileRepo;

fn url_video(name: &str) -> CreateVideoFile {
    CreateVideoFile {
        file_name: name.to_string(),
        original_name: name.to_string(),
        mime_type: "video/mp4".to_string(),
        file_size: 0,
        storage: VideoStorageMode::Url,
        file_path: None,
        source_url: Some(format!("https://cdn.test/{name}")),
        data_base64: None,
    }
}

fn inline_video(name: &str, data: &str) -> CreateVideoFile {
    CreateVideoFile {
        file_name: name.to_string(),
        original_name: name.to_string(),
        mime_type: "video/webm".to_string(),
        file_size: 3,
        storage: VideoStorageMode::Inline,
        file_path: None,
        source_url: None,
        data_base64: Some(data.to_string()),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_starts_inactive(pool: PgPool) {
    let video = VideoFileRepo::create(&pool, &url_video("a.mp4")).await.unwrap();
    assert!(!video.is_active);
    assert_eq!(video.storage, "url");
    assert!(VideoFileRepo::find_active(&pool).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_storage_check_constraint(pool: PgPool) {
    let mut bad = url_video("bad.mp4");
    bad.source_url = None;
    let result = VideoFileRepo::create(&pool, &bad).await;
    assert!(result.is_err(), "url rows need a source_url");

    let mut bad = inline_video("bad.webm", "AAA");
    bad.data_base64 = None;
    bad.file_path = Some("/tmp/x".to_string());
    let result = VideoFileRepo::create(&pool, &bad).await;
    assert!(result.is_err(), "inline rows need data_base64 only");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_activate_swaps_active_flag(pool: PgPool) {
    let a = VideoFileRepo::create(&pool, &url_video("a.mp4")).await.unwrap();
    let b = VideoFileRepo::create(&pool, &url_video("b.mp4")).await.unwrap();

    let activated = VideoFileRepo::activate(&pool, a.id).await.unwrap().unwrap();
    assert!(activated.is_active);

    VideoFileRepo::activate(&pool, b.id).await.unwrap().unwrap();
    let active = VideoFileRepo::find_active(&pool).await.unwrap().unwrap();
    assert_eq!(active.id, b.id);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM video_files WHERE is_active")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    // Re-activating the active row is a no-op.
    VideoFileRepo::activate(&pool, b.id).await.unwrap().unwrap();
    assert_eq!(VideoFileRepo::find_active(&pool).await.unwrap().unwrap().id, b.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_activate_unknown_keeps_current(pool: PgPool) {
    let a = VideoFileRepo::create(&pool, &url_video("a.mp4")).await.unwrap();
    VideoFileRepo::activate(&pool, a.id).await.unwrap();

    let result = VideoFileRepo::activate(&pool, 999_999).await.unwrap();
    assert!(result.is_none());

    let active = VideoFileRepo::find_active(&pool).await.unwrap().unwrap();
    assert_eq!(active.id, a.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_second_active_row_violates_unique_index(pool: PgPool) {
    let a = VideoFileRepo::create(&pool, &url_video("a.mp4")).await.unwrap();
    let b = VideoFileRepo::create(&pool, &url_video("b.mp4")).await.unwrap();
    VideoFileRepo::activate(&pool, a.id).await.unwrap();

    let err = sqlx::query("UPDATE video_files SET is_active = true WHERE id = $1")
        .bind(b.id)
        .execute(&pool)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.constraint(), Some("uq_video_files_active"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_inline_data_and_list_order(pool: PgPool) {
    let first = VideoFileRepo::create(&pool, &inline_video("one.webm", "AAEC"))
        .await
        .unwrap();
    let second = VideoFileRepo::create(&pool, &url_video("two.mp4")).await.unwrap();

    assert_eq!(
        VideoFileRepo::find_inline_data(&pool, first.id).await.unwrap().as_deref(),
        Some("AAEC")
    );
    assert_eq!(VideoFileRepo::find_inline_data(&pool, second.id).await.unwrap(), None);
    assert_eq!(VideoFileRepo::find_inline_data(&pool, 999_999).await.unwrap(), None);

    let ids: Vec<i64> = VideoFileRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_returns_removed_row(pool: PgPool) {
    let video = VideoFileRepo::create(&pool, &url_video("a.mp4")).await.unwrap();

    let removed = VideoFileRepo::delete(&pool, video.id).await.unwrap().unwrap();
    assert_eq!(removed.id, video.id);
    assert!(VideoFileRepo::delete(&pool, video.id).await.unwrap().is_none());
}
