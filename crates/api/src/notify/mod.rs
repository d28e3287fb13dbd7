//! Delivery of contact form inquiries.
//!
//! [`telegram::TelegramNotifier`] posts to a Telegram chat when `BOT_TOKEN`
//! and `TELEGRAM_CHAT_ID` are both set; otherwise [`LogNotifier`] records the
//! inquiry in the server log.

pub mod telegram;

use std::sync::Arc;

use async_trait::async_trait;

use self::telegram::{TelegramConfig, TelegramNotifier};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for inquiry delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote API returned a non-2xx status code.
    #[error("Notification API returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Notifier trait
// ---------------------------------------------------------------------------

/// Sends a formatted inquiry to the site owner.
#[async_trait]
pub trait InquiryNotifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

/// Fallback notifier: logs the inquiry and reports success.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl InquiryNotifier for LogNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        tracing::warn!(
            chars = text.chars().count(),
            "Inquiry notifier is not configured; inquiry was only logged"
        );
        tracing::debug!(inquiry = %text, "Undelivered inquiry");
        Ok(())
    }
}

/// Pick the notifier for the given configuration.
pub fn build_notifier(
    config: Option<&TelegramConfig>,
) -> Result<Arc<dyn InquiryNotifier>, NotifyError> {
    match config {
        Some(config) => Ok(Arc::new(TelegramNotifier::new(config.clone())?)),
        None => {
            tracing::warn!("BOT_TOKEN or TELEGRAM_CHAT_ID is not set; inquiries will only be logged");
            Ok(Arc::new(LogNotifier))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_notifier_always_succeeds() {
        assert!(LogNotifier.notify("hello").await.is_ok());
    }

    #[test]
    fn notify_error_display_http_status() {
        let err = NotifyError::HttpStatus(403);
        assert_eq!(err.to_string(), "Notification API returned HTTP 403");
    }

    #[test]
    fn build_notifier_without_config_falls_back() {
        assert!(build_notifier(None).is_ok());
    }
}
