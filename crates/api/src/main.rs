use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_api::config::ServerConfig;
use vitrine_api::content::database::DatabaseContent;
use vitrine_api::content::env::EnvContent;
use vitrine_api::content::{ContentSource, ContentSourceKind};
use vitrine_api::notify::build_notifier;
use vitrine_api::router::build_app_router;
use vitrine_api::state::AppState;
use vitrine_api::video_store::VideoStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        content_source = config.content_source.name(),
        video_storage = config.video.storage.name(),
        "Loaded server configuration"
    );

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty());

    let (pool, content) = match config.content_source {
        ContentSourceKind::Database => {
            let database_url =
                database_url.expect("DATABASE_URL must be set when CONTENT_SOURCE=database");
            let pool = vitrine_db::create_pool(&database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            vitrine_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            vitrine_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let content: Arc<dyn ContentSource> = Arc::new(DatabaseContent::new(pool.clone()));
            (Some(pool), content)
        }
        ContentSourceKind::Env => {
            // Public reads never touch the database in this mode; a pool is
            // only kept for the health report.
            let pool = database_url.as_deref().map(|url| {
                vitrine_db::create_lazy_pool(url).expect("Invalid DATABASE_URL")
            });
            if pool.is_none() {
                tracing::info!("DATABASE_URL not set; running without a database");
            }
            let content: Arc<dyn ContentSource> = Arc::new(
                EnvContent::from_env().expect("Invalid content environment variables"),
            );
            tracing::info!("Serving read-only content from environment variables");
            (pool, content)
        }
    };

    // --- Inquiry notifier ---
    let notifier =
        build_notifier(config.telegram.as_ref()).expect("Failed to build inquiry notifier");

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        content,
        notifier,
        videos: Arc::new(VideoStore::new(&config.video)),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
