//! Request payload validation.
//!
//! DTOs declare their rules with `#[derive(Validate)]`; [`validate_dto`]
//! runs them and folds the per-field failures into a single
//! [`CoreError::Validation`] message so every endpoint reports bad input the
//! same way.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidateUrl, ValidationError};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a setting key.
pub const MAX_SETTING_KEY_LENGTH: usize = 64;

/// Setting keys are short identifiers such as `backgroundVideo`.
static SETTING_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("valid regex"));

// ---------------------------------------------------------------------------
// DTO validation
// ---------------------------------------------------------------------------

/// Run the derived validation rules of `dto`.
///
/// Field failures are reported as `field: reason` pairs, sorted by field
/// name and joined with `"; "`.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), CoreError> {
    let Err(errors) = dto.validate() else {
        return Ok(());
    };

    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let reason = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {reason}")
            })
        })
        .collect();
    parts.sort();

    Err(CoreError::Validation(parts.join("; ")))
}

/// Validate a settings key taken from the request path.
pub fn validate_setting_key(key: &str) -> Result<(), CoreError> {
    if key.is_empty() || key.len() > MAX_SETTING_KEY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Setting key must be 1-{MAX_SETTING_KEY_LENGTH} characters"
        )));
    }
    if !SETTING_KEY_RE.is_match(key) {
        return Err(CoreError::Validation(format!(
            "Setting key '{key}' may only contain letters, digits, '_', '.' and '-'"
        )));
    }
    Ok(())
}

/// Custom `validator` rule: an absolute `http` or `https` URL.
///
/// Used where the server later redirects visitors to the value, so schemes
/// such as `javascript:` or `data:` are refused.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let lower = value.trim().to_ascii_lowercase();
    let http = lower.starts_with("http://") || lower.starts_with("https://");
    if http && value.validate_url() {
        return Ok(());
    }
    Err(ValidationError::new("http_url").with_message(Cow::Borrowed("must be an http(s) URL")))
}

// ---------------------------------------------------------------------------
// Normalisation
// ---------------------------------------------------------------------------

/// Trim each "what's included" line of a service and drop the blank ones.
///
/// The admin form always submits a trailing empty row.
pub fn normalize_includes(includes: Vec<String>) -> Vec<String> {
    includes
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
