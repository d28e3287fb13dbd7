//! Repository for the `services` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::service::{CreateService, Service, UpdateService};

/// Column list for `services` queries.
const COLUMNS: &str = "\
    id, title, includes, target_audience, work_format, price, sort_order, \
    created_at, updated_at";

/// Provides CRUD operations for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// List all services by their client-supplied order, then creation time.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM services ORDER BY sort_order, created_at, id");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Find a service by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new service.
    pub async fn create(pool: &PgPool, dto: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services \
                 (title, includes, target_audience, work_format, price, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&dto.title)
            .bind(&dto.includes)
            .bind(&dto.target_audience)
            .bind(&dto.work_format)
            .bind(&dto.price)
            .bind(&dto.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Partially update a service.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None`
    /// when no service has this ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET \
                 title = COALESCE($2, title), \
                 includes = COALESCE($3, includes), \
                 target_audience = COALESCE($4, target_audience), \
                 work_format = COALESCE($5, work_format), \
                 price = COALESCE($6, price), \
                 sort_order = COALESCE($7, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.includes)
            .bind(&dto.target_audience)
            .bind(&dto.work_format)
            .bind(&dto.price)
            .bind(&dto.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
