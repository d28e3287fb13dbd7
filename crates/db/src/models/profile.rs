//! Site owner profile shown in the hero section and footer.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitrine_core::types::Timestamp;

/// The singleton row of the `profile` table (`id` is always 1).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: i16,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO replacing the profile text.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertProfile {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub last_name: String,
    #[validate(length(max = 5000, message = "must be at most 5000 characters"))]
    pub description: String,
}
