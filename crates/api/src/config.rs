use crate::auth::jwt::JwtConfig;
use crate::auth::AdminAuthConfig;
use crate::content::ContentSourceKind;
use crate::notify::telegram::TelegramConfig;
use crate::video_store::VideoConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. Invalid values fail fast at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    /// Admin password check.
    pub admin: AdminAuthConfig,
    /// Admin token signing and lifetime.
    pub jwt: JwtConfig,
    /// Where public content is read from.
    pub content_source: ContentSourceKind,
    /// Background video storage.
    pub video: VideoConfig,
    /// Telegram delivery of contact form inquiries, when configured.
    pub telegram: Option<TelegramConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                       |
    /// | `CONTENT_SOURCE`       | `database`                 |
    ///
    /// Admin, token, video and Telegram settings are read by their own
    /// `from_env` constructors.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let content_source = ContentSourceKind::from_name(
            &std::env::var("CONTENT_SOURCE").unwrap_or_else(|_| "database".into()),
        )
        .unwrap_or_else(|e| panic!("{e}"));

        Self {
            host,
            port,
            request_timeout_secs,
            admin: AdminAuthConfig::from_env(),
            jwt: JwtConfig::from_env(),
            content_source,
            video: VideoConfig::from_env(),
            telegram: TelegramConfig::from_env(),
        }
    }
}
