#![allow(dead_code)]

use std::sync::{Arc, LazyLock, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use vitrine_api::auth::jwt::{generate_admin_token, JwtConfig};
use vitrine_api::auth::password::hash_password;
use vitrine_api::auth::AdminAuthConfig;
use vitrine_api::config::ServerConfig;
use vitrine_api::content::database::DatabaseContent;
use vitrine_api::content::{ContentSource, ContentSourceKind};
use vitrine_api::notify::{InquiryNotifier, NotifyError};
use vitrine_api::router::build_app_router;
use vitrine_api::state::AppState;
use vitrine_api::video_store::{VideoConfig, VideoStore};
use vitrine_core::video::VideoStorageMode;

/// Admin password accepted by test apps.
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery-staple";

/// Upload limit used by test apps, small enough to exceed cheaply.
pub const TEST_MAX_UPLOAD_BYTES: u64 = 1024;

/// Hashing is slow in debug builds, so do it once per test binary.
static TEST_PASSWORD_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password(TEST_ADMIN_PASSWORD).expect("hashing should succeed"));

// ---------------------------------------------------------------------------
// Recording notifier
// ---------------------------------------------------------------------------

/// Captures inquiries instead of sending them; optionally fails every call.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl InquiryNotifier for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::HttpStatus(502));
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(storage: VideoStorageMode, upload_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        admin: AdminAuthConfig {
            password_hash: Some(TEST_PASSWORD_HASH.clone()),
        },
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_mins: 15,
        },
        content_source: ContentSourceKind::Database,
        video: VideoConfig {
            storage,
            upload_dir: upload_dir.to_path_buf(),
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        },
        telegram: None,
    }
}

/// A test app plus the pieces tests inspect afterwards.
pub struct TestApp {
    pub router: Router,
    pub config: ServerConfig,
    pub notifier: Arc<RecordingNotifier>,
    /// Kept alive for the duration of the test.
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// A valid admin token for this app's signing secret.
    pub fn admin_token(&self) -> String {
        generate_admin_token(&self.config.jwt).expect("token generation should succeed")
    }
}

/// Options for [`build_test_app_with`].
pub struct TestOptions {
    pub storage: VideoStorageMode,
    pub content: Option<Arc<dyn ContentSource>>,
    pub notifier: Arc<RecordingNotifier>,
    pub admin_password_hash: Option<String>,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            storage: VideoStorageMode::Inline,
            content: None,
            notifier: Arc::new(RecordingNotifier::default()),
            admin_password_hash: Some(TEST_PASSWORD_HASH.clone()),
        }
    }
}

/// Build the full application router backed by the database, with inline
/// video storage.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, TestOptions::default()).router
}

/// Build the full application router through the same builder production
/// uses.
pub fn build_test_app_with(pool: PgPool, options: TestOptions) -> TestApp {
    build(Some(pool), options)
}

/// Build an app with no database at all; `options.content` must be set.
pub fn build_test_app_without_database(options: TestOptions) -> TestApp {
    build(None, options)
}

fn build(pool: Option<PgPool>, options: TestOptions) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("temp dir");
    let mut config = test_config(options.storage, upload_dir.path());
    config.admin.password_hash = options.admin_password_hash;

    let content = match (options.content, &pool) {
        (Some(content), _) => content,
        (None, Some(pool)) => {
            Arc::new(DatabaseContent::new(pool.clone())) as Arc<dyn ContentSource>
        }
        (None, None) => panic!("a content source is required without a database"),
    };
    config.content_source = content.kind();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        content,
        notifier: options.notifier.clone(),
        videos: Arc::new(VideoStore::new(&config.video)),
    };

    TestApp {
        router: build_app_router(state, &config),
        config,
        notifier: options.notifier,
        upload_dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, None, body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn put_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::PUT, uri, Some(token))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

/// Send a raw (possibly malformed) body with a JSON content type.
pub async fn send_raw_json(
    app: Router,
    method: Method,
    uri: &str,
    token: &str,
    body: &'static str,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Boundary used by [`post_multipart_auth`].
const BOUNDARY: &str = "vitrine-test-boundary";

/// POST a single-file `multipart/form-data` body.
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    token: &str,
    field: &str,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
