//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for the append-only click log.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = sqlx::query_as::<_, Click>(
            r#"
            INSERT INTO link_clicks (link_id, ip)
            VALUES ($1, $2)
            RETURNING id, link_id, clicked_at, ip
            "#,
        )
        .bind(new_click.link_id)
        .bind(&new_click.ip)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(click)
    }

    async fn find_recent(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError> {
        // id breaks ties between clicks landing in the same microsecond.
        let clicks = sqlx::query_as::<_, Click>(
            r#"
            SELECT id, link_id, clicked_at, ip
            FROM link_clicks
            WHERE link_id = $1
            ORDER BY clicked_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }
}
