//! Repository for the singleton `profile` row.

use sqlx::PgPool;

use crate::models::profile::{Profile, UpsertProfile};

/// Column list for `profile` queries.
const COLUMNS: &str = "id, first_name, last_name, description, created_at, updated_at";

/// Provides data access for the site owner profile.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch the profile, or `None` before it was first saved.
    pub async fn get(pool: &PgPool) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profile WHERE id = 1");
        sqlx::query_as::<_, Profile>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Create or replace the profile.
    pub async fn upsert(pool: &PgPool, dto: &UpsertProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profile (id, first_name, last_name, description) \
             VALUES (1, $1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET \
                 first_name = EXCLUDED.first_name, \
                 last_name = EXCLUDED.last_name, \
                 description = EXCLUDED.description \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&dto.description)
            .fetch_one(pool)
            .await
    }
}
