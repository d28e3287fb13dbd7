//! Public contact links.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitrine_core::fields::blank_as_none;
use vitrine_core::types::Timestamp;

/// The singleton row of the `contacts` table (`id` is always 1).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: i16,
    pub telegram: Option<String>,
    pub github: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO replacing both contact links. Omitted links are cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpsertContacts {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url(message = "must be a valid URL"))]
    pub telegram: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url(message = "must be a valid URL"))]
    pub github: Option<String>,
}
