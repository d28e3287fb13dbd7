//! Repository for the singleton `contacts` row.

use sqlx::PgPool;

use crate::models::contact::{Contact, UpsertContacts};

/// Column list for `contacts` queries.
const COLUMNS: &str = "id, telegram, github, created_at, updated_at";

/// Provides data access for the public contact links.
pub struct ContactRepo;

impl ContactRepo {
    /// Fetch the contact links, or `None` before they were first saved.
    pub async fn get(pool: &PgPool) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = 1");
        sqlx::query_as::<_, Contact>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Create or replace both contact links.
    pub async fn upsert(pool: &PgPool, dto: &UpsertContacts) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (id, telegram, github) \
             VALUES (1, $1, $2) \
             ON CONFLICT (id) DO UPDATE SET \
                 telegram = EXCLUDED.telegram, \
                 github = EXCLUDED.github \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&dto.telegram)
            .bind(&dto.github)
            .fetch_one(pool)
            .await
    }
}
