use std::sync::Arc;

use vitrine_core::error::CoreError;
use vitrine_db::DbPool;

use crate::config::ServerConfig;
use crate::content::ContentSource;
use crate::error::AppError;
use crate::notify::InquiryNotifier;
use crate::video_store::VideoStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. `None` when content comes from the
    /// environment and no `DATABASE_URL` is set.
    pub pool: Option<DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source of every public read.
    pub content: Arc<dyn ContentSource>,
    /// Delivery channel for contact form inquiries.
    pub notifier: Arc<dyn InquiryNotifier>,
    /// Background video byte storage.
    pub videos: Arc<VideoStore>,
}

impl AppState {
    /// The pool admin writes go to.
    ///
    /// Refused with 409 when content is served from a read-only snapshot.
    pub fn writable_db(&self) -> Result<&DbPool, AppError> {
        if !self.content.is_writable() {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Content is read-only while served from the '{}' source",
                self.content.kind().name()
            ))));
        }
        self.pool
            .as_ref()
            .ok_or_else(|| AppError::InternalError("No database pool configured".into()))
    }
}
