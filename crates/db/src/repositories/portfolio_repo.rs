//! Repository for the `portfolio_items` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::portfolio::{CreatePortfolioItem, PortfolioItem, UpdatePortfolioItem};

/// Column list for `portfolio_items` queries.
const COLUMNS: &str = "\
    id, title, description, image_url, sort_order, has_link, link_url, \
    created_at, updated_at";

/// Provides CRUD operations for portfolio items.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// List all items by their client-supplied order, then creation time.
    pub async fn list(pool: &PgPool) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_items ORDER BY sort_order, created_at, id"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items WHERE id = $1");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new item.
    pub async fn create(
        pool: &PgPool,
        dto: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_items \
                 (title, description, image_url, sort_order, has_link, link_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.image_url)
            .bind(&dto.sort_order)
            .bind(dto.has_link)
            .bind(&dto.link_url)
            .fetch_one(pool)
            .await
    }

    /// Partially update an item.
    ///
    /// Uses `COALESCE` so only provided fields are changed. `link_url` is
    /// replaced (possibly with NULL) when provided, and cleared when
    /// `has_link` is turned off without a new link. Returns `None` when no
    /// item has this ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdatePortfolioItem,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let link_url_provided = dto.link_url.is_some();
        let link_url_value = dto.link_url.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE portfolio_items SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 image_url = COALESCE($4, image_url), \
                 sort_order = COALESCE($5, sort_order), \
                 has_link = COALESCE($6, has_link), \
                 link_url = CASE \
                     WHEN $7 THEN $8 \
                     WHEN $6 = false THEN NULL \
                     ELSE link_url END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.image_url)
            .bind(&dto.sort_order)
            .bind(dto.has_link)
            .bind(link_url_provided)
            .bind(link_url_value)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
