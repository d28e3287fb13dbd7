//! Services offered, rendered as an accordion on the landing page.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitrine_core::types::{DbId, Timestamp};

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub title: String,
    /// "What's included" bullet lines.
    pub includes: Vec<String>,
    pub target_audience: String,
    pub work_format: String,
    pub price: String,
    #[serde(rename = "order")]
    pub sort_order: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateService {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: String,
    #[validate(length(max = 50, message = "must have at most 50 lines"))]
    pub includes: Vec<String>,
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub target_audience: String,
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub work_format: String,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub price: String,
    #[serde(rename = "order")]
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub sort_order: String,
}

/// DTO for partially updating a service.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateService {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 50, message = "must have at most 50 lines"))]
    pub includes: Option<Vec<String>>,
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub target_audience: Option<String>,
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub work_format: Option<String>,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub price: Option<String>,
    #[serde(rename = "order")]
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub sort_order: Option<String>,
}
