//! Read-only content taken from environment variables.
//!
//! | Env Var                  | Content                                      |
//! |--------------------------|----------------------------------------------|
//! | `PROFILE_FIRST_NAME`     | profile (absent when none of the three set)  |
//! | `PROFILE_LAST_NAME`      |                                              |
//! | `PROFILE_DESCRIPTION`    |                                              |
//! | `PORTFOLIO_ITEMS`        | JSON array of portfolio create bodies        |
//! | `SERVICES_LIST`          | JSON array of service create bodies          |
//! | `TELEGRAM_CONTACT`       | contact link                                 |
//! | `GITHUB_CONTACT`         | contact link                                 |
//! | `SETTING_<KEY>`          | setting `key` (matched upper-cased)          |
//! | `BACKGROUND_VIDEO_URL`   | the only video, URL storage, active          |
//!
//! List entries get ids `1..=n` in array order.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use validator::Validate;
use vitrine_core::error::CoreError;
use vitrine_core::types::{DbId, Timestamp};
use vitrine_core::validation::{normalize_includes, validate_dto};
use vitrine_core::video::{guess_mime_from_url, VideoStorageMode};
use vitrine_db::models::contact::Contact;
use vitrine_db::models::portfolio::{CreatePortfolioItem, PortfolioItem};
use vitrine_db::models::profile::Profile;
use vitrine_db::models::service::{CreateService, Service};
use vitrine_db::models::setting::SettingValue;
use vitrine_db::models::video_file::VideoFile;

use super::{ContentSource, ContentSourceKind};
use crate::error::AppResult;

/// Prefix of per-key setting variables.
const SETTING_PREFIX: &str = "SETTING_";

/// Name reported for a URL video whose path has no file name.
const DEFAULT_VIDEO_NAME: &str = "background-video";

/// Content snapshot built once at startup.
#[derive(Debug, Clone)]
pub struct EnvContent {
    profile: Option<Profile>,
    portfolio: Vec<PortfolioItem>,
    services: Vec<Service>,
    contacts: Option<Contact>,
    settings: HashMap<String, String>,
    video: Option<VideoFile>,
}

impl EnvContent {
    /// Snapshot the process environment.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_vars(std::env::vars())
    }

    /// Build the snapshot from `(name, value)` pairs.
    ///
    /// Fails when `PORTFOLIO_ITEMS` or `SERVICES_LIST` is not a JSON array of
    /// valid entries.
    pub fn from_vars<I>(vars: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();
        let now = Utc::now();

        let profile = parse_profile(&vars, now);

        let portfolio = parse_list::<CreatePortfolioItem>(&vars, "PORTFOLIO_ITEMS")?
            .into_iter()
            .zip(1..)
            .map(|(dto, id)| PortfolioItem {
                id,
                title: dto.title,
                description: dto.description,
                image_url: dto.image_url,
                sort_order: dto.sort_order,
                has_link: dto.has_link,
                link_url: dto.link_url,
                created_at: now,
                updated_at: now,
            })
            .collect::<Vec<_>>();

        let services = parse_list::<CreateService>(&vars, "SERVICES_LIST")?
            .into_iter()
            .zip(1..)
            .map(|(dto, id)| Service {
                id,
                title: dto.title,
                includes: normalize_includes(dto.includes),
                target_audience: dto.target_audience,
                work_format: dto.work_format,
                price: dto.price,
                sort_order: dto.sort_order,
                created_at: now,
                updated_at: now,
            })
            .collect::<Vec<_>>();

        let telegram = vars.get("TELEGRAM_CONTACT").cloned();
        let github = vars.get("GITHUB_CONTACT").cloned();
        let contacts = (telegram.is_some() || github.is_some()).then(|| Contact {
            id: 1,
            telegram,
            github,
            created_at: now,
            updated_at: now,
        });

        let settings = vars
            .iter()
            .filter_map(|(name, value)| {
                name.strip_prefix(SETTING_PREFIX)
                    .map(|key| (key.to_string(), value.clone()))
            })
            .collect();

        let video = vars
            .get("BACKGROUND_VIDEO_URL")
            .map(|url| url_video(url.trim(), now));

        Ok(Self {
            profile,
            portfolio: sorted_by_order(portfolio, |i| &i.sort_order),
            services: sorted_by_order(services, |s| &s.sort_order),
            contacts,
            settings,
            video,
        })
    }
}

fn parse_profile(vars: &HashMap<String, String>, now: Timestamp) -> Option<Profile> {
    let first_name = vars.get("PROFILE_FIRST_NAME");
    let last_name = vars.get("PROFILE_LAST_NAME");
    let description = vars.get("PROFILE_DESCRIPTION");

    if first_name.is_none() && last_name.is_none() && description.is_none() {
        return None;
    }

    Some(Profile {
        id: 1,
        first_name: first_name.cloned().unwrap_or_default(),
        last_name: last_name.cloned().unwrap_or_default(),
        description: description.cloned().unwrap_or_default(),
        created_at: now,
        updated_at: now,
    })
}

/// Parse a JSON array variable, validating every entry. Unset means empty.
fn parse_list<T>(vars: &HashMap<String, String>, name: &str) -> Result<Vec<T>, CoreError>
where
    T: DeserializeOwned + Validate,
{
    let Some(raw) = vars.get(name) else {
        return Ok(Vec::new());
    };

    let entries: Vec<T> = serde_json::from_str(raw)
        .map_err(|e| CoreError::Validation(format!("{name} is not a valid JSON array: {e}")))?;

    for (index, entry) in entries.iter().enumerate() {
        validate_dto(entry).map_err(|e| {
            CoreError::Validation(format!("{name}[{index}] is invalid: {e}"))
        })?;
    }
    Ok(entries)
}

/// Stable sort by the client order string; ties keep array order.
fn sorted_by_order<T>(mut items: Vec<T>, order: impl Fn(&T) -> &String) -> Vec<T> {
    items.sort_by(|a, b| order(a).cmp(order(b)));
    items
}

fn url_video(url: &str, now: Timestamp) -> VideoFile {
    let name = url
        .split(['?', '#'])
        .next()
        .and_then(|path| path.rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or(DEFAULT_VIDEO_NAME)
        .to_string();

    VideoFile {
        id: 1,
        file_name: name.clone(),
        original_name: name,
        mime_type: guess_mime_from_url(url).to_string(),
        file_size: 0,
        storage: VideoStorageMode::Url.name().to_string(),
        file_path: None,
        source_url: Some(url.to_string()),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl ContentSource for EnvContent {
    fn kind(&self) -> ContentSourceKind {
        ContentSourceKind::Env
    }

    fn is_writable(&self) -> bool {
        false
    }

    async fn profile(&self) -> AppResult<Option<Profile>> {
        Ok(self.profile.clone())
    }

    async fn portfolio(&self) -> AppResult<Vec<PortfolioItem>> {
        Ok(self.portfolio.clone())
    }

    async fn portfolio_item(&self, id: DbId) -> AppResult<Option<PortfolioItem>> {
        Ok(self.portfolio.iter().find(|i| i.id == id).cloned())
    }

    async fn services(&self) -> AppResult<Vec<Service>> {
        Ok(self.services.clone())
    }

    async fn service(&self, id: DbId) -> AppResult<Option<Service>> {
        Ok(self.services.iter().find(|s| s.id == id).cloned())
    }

    async fn contacts(&self) -> AppResult<Option<Contact>> {
        Ok(self.contacts.clone())
    }

    async fn setting(&self, key: &str) -> AppResult<Option<SettingValue>> {
        Ok(self
            .settings
            .get(&key.to_uppercase())
            .map(|value| SettingValue {
                key: key.to_string(),
                value: value.clone(),
            }))
    }

    async fn videos(&self) -> AppResult<Vec<VideoFile>> {
        Ok(self.video.iter().cloned().collect())
    }

    async fn active_video(&self) -> AppResult<Option<VideoFile>> {
        Ok(self.video.clone())
    }

    async fn video(&self, id: DbId) -> AppResult<Option<VideoFile>> {
        Ok(self.video.clone().filter(|v| v.id == id))
    }
}
