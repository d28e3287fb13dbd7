//! HTTP-level integration tests for serving content from environment
//! variables.

mod common;

use std::sync::Arc;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_json, get, post_json_auth, put_auth, put_json_auth, TestApp, TestOptions};
use serde_json::json;
use sqlx::PgPool;
use vitrine_api::content::env::EnvContent;

fn env_content() -> EnvContent {
    let vars = [
        ("PROFILE_FIRST_NAME", "Ada"),
        ("PROFILE_LAST_NAME", "Lovelace"),
        ("PROFILE_DESCRIPTION", "Engineer"),
        (
            "PORTFOLIO_ITEMS",
            r#"[{"title": "Second", "description": "", "image_url": "https://i.test/2.png", "order": "2"},
                {"title": "First", "description": "", "image_url": "https://i.test/1.png", "order": "1"}]"#,
        ),
        (
            "SERVICES_LIST",
            r#"[{"title": "Sites", "includes": ["Design", " "], "target_audience": "",
                 "work_format": "", "price": "", "order": "1"}]"#,
        ),
        ("TELEGRAM_CONTACT", "https://t.me/ada"),
        ("SETTING_HEROTITLE", "Hello"),
        ("BACKGROUND_VIDEO_URL", "https://cdn.test/bg/loop.mp4"),
    ];
    EnvContent::from_vars(
        vars.iter()
            .map(|(name, value)| (name.to_string(), value.to_string())),
    )
    .unwrap()
}

fn env_options() -> TestOptions {
    TestOptions {
        content: Some(Arc::new(env_content())),
        ..Default::default()
    }
}

fn env_app(pool: PgPool) -> TestApp {
    common::build_test_app_with(pool, env_options())
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reads_come_from_environment(pool: PgPool) {
    let test = env_app(pool);

    let json = body_json(get(test.app(), "/api/profile").await).await;
    assert_eq!(json["data"]["first_name"], "Ada");

    let json = body_json(get(test.app(), "/api/portfolio").await).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);

    let json = body_json(get(test.app(), "/api/portfolio/1").await).await;
    assert_eq!(json["data"]["title"], "Second");

    let json = body_json(get(test.app(), "/api/services").await).await;
    assert_eq!(json["data"][0]["includes"], json!(["Design"]));

    let json = body_json(get(test.app(), "/api/contacts").await).await;
    assert_eq!(json["data"]["telegram"], "https://t.me/ada");
    assert!(json["data"]["github"].is_null());

    let json = body_json(get(test.app(), "/api/settings/heroTitle").await).await;
    assert_eq!(json["data"], json!({"key": "heroTitle", "value": "Hello"}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_background_video_from_environment(pool: PgPool) {
    let test = env_app(pool);

    let json = body_json(get(test.app(), "/api/videos/active").await).await;
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["file_name"], "loop.mp4");
    assert_eq!(json["data"]["storage"], "url");

    let response = get(test.app(), "/api/videos/1/content").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "https://cdn.test/bg/loop.mp4");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_writes_are_refused(pool: PgPool) {
    let test = env_app(pool);
    let token = test.admin_token();

    let response = put_json_auth(
        test.app(),
        "/api/admin/profile",
        &token,
        json!({"first_name": "Grace", "last_name": "Hopper", "description": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json_auth(
        test.app(),
        "/api/admin/videos",
        &token,
        json!({"url": "https://cdn.test/other.mp4"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = put_auth(test.app(), "/api/admin/videos/1/activate", &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The snapshot is unchanged.
    let json = body_json(get(test.app(), "/api/profile").await).await;
    assert_eq!(json["data"]["first_name"], "Ada");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_env_source(pool: PgPool) {
    let test = env_app(pool);

    let json = body_json(get(test.app(), "/health").await).await;
    assert_eq!(json["content_source"], "env");
}

#[tokio::test]
async fn test_runs_without_database() {
    let test = common::build_test_app_without_database(env_options());
    let token = test.admin_token();

    let json = body_json(get(test.app(), "/health").await).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], false);
    assert_eq!(json["content_source"], "env");

    let json = body_json(get(test.app(), "/api/profile").await).await;
    assert_eq!(json["data"]["first_name"], "Ada");

    let response = get(test.app(), "/api/videos/1/content").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let response = put_auth(test.app(), "/api/admin/videos/1/activate", &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
