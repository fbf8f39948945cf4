//! Repository trait for short link persistence.

use crate::domain::context::RequestContext;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable store of short links keyed by numeric id.
///
/// Implementations must enforce alias uniqueness atomically with the write and
/// report a collision as [`AppError::AliasTaken`], distinct from every other
/// failure. The alias retry loop in
/// [`crate::application::services::UrlService::save`] branches on exactly that
/// distinction.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasTaken`] if the alias already exists.
    /// Returns [`AppError::Store`] on any other failure.
    async fn save(&self, ctx: &RequestContext, new_link: NewShortLink) -> Result<(), AppError>;

    /// Returns all links ordered by creation time, oldest first.
    ///
    /// An empty store yields an empty vector.
    async fn list(&self, ctx: &RequestContext) -> Result<Vec<ShortLink>, AppError>;

    /// Looks up a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    async fn get(&self, ctx: &RequestContext, id: i64) -> Result<ShortLink, AppError>;

    /// Replaces the original URL and, when `alias` is `Some`, the alias.
    ///
    /// Updating an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasTaken`] if the new alias collides.
    async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        new_url: String,
        alias: Option<String>,
    ) -> Result<(), AppError>;

    /// Removes a link. Deleting an unknown id is not an error.
    async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self, ctx: &RequestContext) -> Result<(), AppError>;
}
