//! Content sources serving every public read.
//!
//! - [`database::DatabaseContent`] -- reads through the repositories; writable.
//! - [`env::EnvContent`] -- a snapshot of environment variables taken at
//!   startup; read-only, so admin writes answer 409.

pub mod database;
pub mod env;

use async_trait::async_trait;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_db::models::contact::Contact;
use vitrine_db::models::portfolio::PortfolioItem;
use vitrine_db::models::profile::Profile;
use vitrine_db::models::service::Service;
use vitrine_db::models::setting::SettingValue;
use vitrine_db::models::video_file::VideoFile;

use crate::error::AppResult;

/// Which content source the server was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSourceKind {
    Database,
    Env,
}

impl ContentSourceKind {
    /// Parse the `CONTENT_SOURCE` variable.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name.trim() {
            "database" => Ok(Self::Database),
            "env" => Ok(Self::Env),
            other => Err(CoreError::Validation(format!(
                "Unknown content source '{other}'. Must be one of: database, env"
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Env => "env",
        }
    }
}

/// Read access to the site content.
///
/// `None` means "not stored": handlers turn it into 404, except settings,
/// which read as an empty value.
#[async_trait]
pub trait ContentSource: Send + Sync {
    fn kind(&self) -> ContentSourceKind;

    /// Whether admin writes may go to the database.
    fn is_writable(&self) -> bool;

    async fn profile(&self) -> AppResult<Option<Profile>>;

    async fn portfolio(&self) -> AppResult<Vec<PortfolioItem>>;

    async fn portfolio_item(&self, id: DbId) -> AppResult<Option<PortfolioItem>>;

    async fn services(&self) -> AppResult<Vec<Service>>;

    async fn service(&self, id: DbId) -> AppResult<Option<Service>>;

    async fn contacts(&self) -> AppResult<Option<Contact>>;

    async fn setting(&self, key: &str) -> AppResult<Option<SettingValue>>;

    /// Video metadata, newest first.
    async fn videos(&self) -> AppResult<Vec<VideoFile>>;

    async fn active_video(&self) -> AppResult<Option<VideoFile>>;

    async fn video(&self, id: DbId) -> AppResult<Option<VideoFile>>;
}
