//! Portfolio gallery items.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitrine_core::fields::{blank_as_none, clearable};
use vitrine_core::types::{DbId, Timestamp};

/// A row from the `portfolio_items` table.
///
/// `sort_order` is an opaque client string exposed as `order`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(rename = "order")]
    pub sort_order: String,
    pub has_link: bool,
    pub link_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a portfolio item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePortfolioItem {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: String,
    #[validate(length(max = 5000, message = "must be at most 5000 characters"))]
    pub description: String,
    #[validate(length(min = 1, max = 2048, message = "must be 1-2048 characters"))]
    pub image_url: String,
    #[serde(rename = "order")]
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub sort_order: String,
    #[serde(default)]
    pub has_link: bool,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url(message = "must be a valid URL"))]
    pub link_url: Option<String>,
}

/// DTO for partially updating a portfolio item.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePortfolioItem {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 5000, message = "must be at most 5000 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 2048, message = "must be 1-2048 characters"))]
    pub image_url: Option<String>,
    #[serde(rename = "order")]
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub sort_order: Option<String>,
    pub has_link: Option<bool>,
    /// Omitted keeps the link, `null` or `""` clears it.
    #[serde(default, deserialize_with = "clearable")]
    #[validate(url(message = "must be a valid URL"))]
    pub link_url: Option<Option<String>>,
}
