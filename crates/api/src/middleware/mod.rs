//! Request extractors guarding admin routes.
//!
//! - [`auth::RequireAdmin`] -- Requires a valid admin Bearer token.

pub mod auth;
