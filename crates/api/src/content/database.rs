//! Content served straight from PostgreSQL.

use async_trait::async_trait;
use vitrine_core::types::DbId;
use vitrine_db::models::contact::Contact;
use vitrine_db::models::portfolio::PortfolioItem;
use vitrine_db::models::profile::Profile;
use vitrine_db::models::service::Service;
use vitrine_db::models::setting::SettingValue;
use vitrine_db::models::video_file::VideoFile;
use vitrine_db::repositories::{
    ContactRepo, PortfolioRepo, ProfileRepo, ServiceRepo, SettingRepo, VideoFileRepo,
};
use vitrine_db::DbPool;

use super::{ContentSource, ContentSourceKind};
use crate::error::AppResult;

/// Delegates every read to the repositories.
pub struct DatabaseContent {
    pool: DbPool,
}

impl DatabaseContent {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentSource for DatabaseContent {
    fn kind(&self) -> ContentSourceKind {
        ContentSourceKind::Database
    }

    fn is_writable(&self) -> bool {
        true
    }

    async fn profile(&self) -> AppResult<Option<Profile>> {
        Ok(ProfileRepo::get(&self.pool).await?)
    }

    async fn portfolio(&self) -> AppResult<Vec<PortfolioItem>> {
        Ok(PortfolioRepo::list(&self.pool).await?)
    }

    async fn portfolio_item(&self, id: DbId) -> AppResult<Option<PortfolioItem>> {
        Ok(PortfolioRepo::find_by_id(&self.pool, id).await?)
    }

    async fn services(&self) -> AppResult<Vec<Service>> {
        Ok(ServiceRepo::list(&self.pool).await?)
    }

    async fn service(&self, id: DbId) -> AppResult<Option<Service>> {
        Ok(ServiceRepo::find_by_id(&self.pool, id).await?)
    }

    async fn contacts(&self) -> AppResult<Option<Contact>> {
        Ok(ContactRepo::get(&self.pool).await?)
    }

    async fn setting(&self, key: &str) -> AppResult<Option<SettingValue>> {
        let setting = SettingRepo::get(&self.pool, key).await?;
        Ok(setting.map(SettingValue::from))
    }

    async fn videos(&self) -> AppResult<Vec<VideoFile>> {
        Ok(VideoFileRepo::list(&self.pool).await?)
    }

    async fn active_video(&self) -> AppResult<Option<VideoFile>> {
        Ok(VideoFileRepo::find_active(&self.pool).await?)
    }

    async fn video(&self, id: DbId) -> AppResult<Option<VideoFile>> {
        Ok(VideoFileRepo::find_by_id(&self.pool, id).await?)
    }
}
