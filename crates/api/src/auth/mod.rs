//! Admin authentication primitives.
//!
//! - [`password`] -- Argon2id hashing and verification of the shared admin password.
//! - [`jwt`] -- HS256 admin token generation and validation.

pub mod jwt;
pub mod password;

use self::password::{hash_password, is_valid_hash};

/// How the admin password is checked.
///
/// `password_hash` is `None` when neither `ADMIN_PASSWORD_HASH` nor
/// `ADMIN_PASSWORD` is set; admin login is then refused.
#[derive(Debug, Clone, Default)]
pub struct AdminAuthConfig {
    /// PHC-formatted Argon2id hash of the admin password.
    pub password_hash: Option<String>,
}

impl AdminAuthConfig {
    /// Load the admin password from environment variables.
    ///
    /// | Env Var               | Notes                                   |
    /// |-----------------------|-----------------------------------------|
    /// | `ADMIN_PASSWORD_HASH` | Argon2 PHC string, preferred            |
    /// | `ADMIN_PASSWORD`      | plaintext, hashed once at startup       |
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_PASSWORD_HASH` is not a valid PHC string or hashing
    /// `ADMIN_PASSWORD` fails.
    pub fn from_env() -> Self {
        let from_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .ok()
            .filter(|h| !h.trim().is_empty());

        if let Some(hash) = from_hash {
            assert!(
                is_valid_hash(&hash),
                "ADMIN_PASSWORD_HASH must be an Argon2 PHC string"
            );
            return Self {
                password_hash: Some(hash),
            };
        }

        let from_plain = std::env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        match from_plain {
            Some(password) => Self {
                password_hash: Some(
                    hash_password(&password).expect("Failed to hash ADMIN_PASSWORD"),
                ),
            },
            None => {
                tracing::warn!(
                    "Neither ADMIN_PASSWORD_HASH nor ADMIN_PASSWORD is set; admin login is disabled"
                );
                Self::default()
            }
        }
    }
}
