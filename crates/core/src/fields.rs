//! Serde helpers for optional text fields submitted by the admin forms.
//!
//! The forms send `""` for a link left blank instead of omitting it, so
//! blank strings are read as "no value" before any URL rule runs.

use serde::{Deserialize, Deserializer};

/// Read an optional string, treating `null` and blank strings as `None`.
///
/// Pair with `#[serde(default)]` so an omitted field is accepted too.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Read a clearable field of a partial update.
///
/// With `#[serde(default)]`, an omitted field stays `None` (keep the stored
/// value), while `null` or a blank string becomes `Some(None)` (clear it).
pub fn clearable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    blank_as_none(deserializer).map(Some)
}
