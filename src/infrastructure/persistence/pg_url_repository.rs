//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::RequestContext;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_alias;

/// PostgreSQL repository for short links.
///
/// Alias uniqueness is enforced by the `url_alias_key` constraint, so the
/// check and the write happen atomically inside the database even when many
/// requests insert concurrently.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Maps an alias unique violation to [`AppError::AliasTaken`].
fn map_write_error(e: sqlx::Error) -> AppError {
    if is_unique_violation_on_alias(&e) {
        AppError::AliasTaken
    } else {
        AppError::Store(e)
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save(&self, ctx: &RequestContext, new_link: NewShortLink) -> Result<(), AppError> {
        tracing::debug!(request_id = ctx.request_id(), alias = %new_link.alias, "Inserting url");

        sqlx::query("INSERT INTO url (original_url, alias) VALUES ($1, $2)")
            .bind(&new_link.original_url)
            .bind(&new_link.alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    async fn list(&self, _ctx: &RequestContext) -> Result<Vec<ShortLink>, AppError> {
        let links = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, original_url, alias, created_at, expires_at, clicks
            FROM url
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn get(&self, _ctx: &RequestContext, id: i64) -> Result<ShortLink, AppError> {
        sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, original_url, alias, created_at, expires_at, clicks
            FROM url
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(AppError::NotFound)
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        new_url: String,
        alias: Option<String>,
    ) -> Result<(), AppError> {
        tracing::debug!(request_id = ctx.request_id(), id, "Updating url");

        sqlx::query(
            r#"
            UPDATE url
            SET original_url = $2,
                alias = COALESCE($3, alias)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(new_url)
        .bind(alias)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        tracing::debug!(request_id = ctx.request_id(), id, "Deleting url");

        sqlx::query("DELETE FROM url WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn ping(&self, _ctx: &RequestContext) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
