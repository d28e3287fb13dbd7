//! Admin token generation and validation.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload whose subject
//! is always [`ADMIN_SUBJECT`]. There is a single admin identity, so no
//! refresh tokens or server-side sessions exist; a token is valid until it
//! expires or the signing secret changes.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject claim of every admin token.
pub const ADMIN_SUBJECT: &str = "admin";

/// Default admin token lifetime in minutes (12 hours).
const DEFAULT_TOKEN_EXPIRY_MINS: i64 = 720;

/// Length of the per-process secret generated when `JWT_SECRET` is unset.
const GENERATED_SECRET_LEN: usize = 64;

/// JWT claims embedded in every admin token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject, always [`ADMIN_SUBJECT`].
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit logging.
    pub jti: String,
}

/// Configuration for admin token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in minutes.
    pub token_expiry_mins: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                | Required | Default            |
    /// |------------------------|----------|--------------------|
    /// | `JWT_SECRET`           | no       | random per process |
    /// | `ADMIN_TOKEN_TTL_MINS` | no       | `720`              |
    ///
    /// Without `JWT_SECRET`, issued tokens stop working when the process
    /// restarts.
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_TOKEN_TTL_MINS` is not a positive integer.
    pub fn from_env() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET is not set; using a random per-process secret");
                generate_secret()
            }
        };

        let token_expiry_mins: i64 = std::env::var("ADMIN_TOKEN_TTL_MINS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_EXPIRY_MINS.to_string())
            .parse()
            .expect("ADMIN_TOKEN_TTL_MINS must be a valid i64");
        assert!(token_expiry_mins > 0, "ADMIN_TOKEN_TTL_MINS must be positive");

        Self {
            secret,
            token_expiry_mins,
        }
    }

    /// Token lifetime in seconds, as reported to clients.
    pub fn expires_in_secs(&self) -> i64 {
        self.token_expiry_mins * 60
    }
}

/// Random alphanumeric signing secret.
fn generate_secret() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(GENERATED_SECRET_LEN)
        .map(char::from)
        .collect()
}

/// Generate an HS256 admin token.
pub fn generate_admin_token(config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: ADMIN_SUBJECT.to_string(),
        exp: now + config.expires_in_secs(),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
