//! Free-form key/value site settings.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitrine_core::types::Timestamp;

/// A row from the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public view of a setting. Unset keys read as an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingValue {
    pub key: String,
    pub value: String,
}

impl SettingValue {
    /// The value reported for a key that was never written.
    pub fn unset(key: &str) -> Self {
        Self {
            key: key.to_string(),
            value: String::new(),
        }
    }
}

impl From<Setting> for SettingValue {
    fn from(setting: Setting) -> Self {
        Self {
            key: setting.key,
            value: setting.value,
        }
    }
}

/// DTO for writing a setting value (the key comes from the path).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertSetting {
    #[validate(length(max = 10000, message = "must be at most 10000 characters"))]
    pub value: String,
}
