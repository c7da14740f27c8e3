//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// The `links_alias_key` unique constraint enforces alias uniqueness;
/// violations surface as [`AppError::Conflict`] via the shared error
/// conversion.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (alias, original_url, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, alias, original_url, created_at, expires_at, click_count
            "#,
        )
        .bind(&new_link.alias)
        .bind(&new_link.original_url)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, alias, original_url, created_at, expires_at, click_count
            FROM links
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, alias, original_url, created_at, expires_at, click_count
            FROM links
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn increment_click_count(&self, link_id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE links
            SET click_count = click_count + 1
            WHERE id = $1
            "#,
        )
        .bind(link_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete(&self, link_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(link_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
