//! Short link allocation and resolution service.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::RequestContext;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::alias_generator::AliasGenerator;

/// Number of generated aliases tried before giving up.
pub const MAX_ALIAS_ATTEMPTS: usize = 5;

/// Composes a short URL from a base and a code.
///
/// Trailing slashes on `base` are trimmed so exactly one `/` separates the two:
/// `build_short_url("http://host///", "code") == "http://host/code"`.
pub fn build_short_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}

/// Service for allocating, resolving and maintaining short links.
///
/// Holds no mutable state of its own. Alias uniqueness is enforced by the
/// repository, so concurrent callers need no in-process locking.
///
/// Collision counters go through the `metrics` facade and are dropped unless
/// a recorder is installed.
pub struct UrlService<R: UrlRepository + ?Sized, G: AliasGenerator + ?Sized> {
    repository: Arc<R>,
    generator: Arc<G>,
    base_url: String,
}

impl<R: UrlRepository + ?Sized, G: AliasGenerator + ?Sized> UrlService<R, G> {
    /// Creates a new service composing short URLs under `base_url`.
    pub fn new(repository: Arc<R>, generator: Arc<G>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into(),
        }
    }

    /// Stores `original_url` under a caller-chosen or generated alias.
    ///
    /// # Caller-supplied alias
    ///
    /// Exactly one store attempt. A collision surfaces as
    /// [`AppError::AliasTaken`] and is not retried.
    ///
    /// # Generated alias
    ///
    /// Up to [`MAX_ALIAS_ATTEMPTS`] attempts, each with a fresh alias.
    /// Collisions move on to the next attempt; any other error stops the loop
    /// and is returned as-is.
    ///
    /// If every attempt collides, `Ok(())` is returned although nothing was
    /// stored. A warning is logged and
    /// `shortlink_alias_attempts_exhausted_total` is incremented.
    pub async fn save(
        &self,
        ctx: &RequestContext,
        original_url: String,
        alias: Option<String>,
    ) -> Result<(), AppError> {
        match alias {
            Some(alias) => self.save_with_alias(ctx, original_url, alias).await,
            None => self.save_with_generated_alias(ctx, original_url).await,
        }
    }

    async fn save_with_alias(
        &self,
        ctx: &RequestContext,
        original_url: String,
        alias: String,
    ) -> Result<(), AppError> {
        let short_url = build_short_url(&self.base_url, &alias);

        self.repository
            .save(ctx, NewShortLink::new(original_url.as_str(), short_url))
            .await
            .inspect_err(|e| {
                error!(
                    request_id = ctx.request_id(),
                    url = %original_url,
                    alias = %alias,
                    error = %e,
                    "Failed to save url"
                );
            })
    }

    async fn save_with_generated_alias(
        &self,
        ctx: &RequestContext,
        original_url: String,
    ) -> Result<(), AppError> {
        for attempt in 1..=MAX_ALIAS_ATTEMPTS {
            let alias = self.generator.generate();
            let short_url = build_short_url(&self.base_url, &alias);

            match self
                .repository
                .save(ctx, NewShortLink::new(original_url.as_str(), short_url))
                .await
            {
                Ok(()) => {
                    debug!(
                        request_id = ctx.request_id(),
                        url = %original_url,
                        alias = %alias,
                        attempt,
                        "Saved url with generated alias"
                    );
                    return Ok(());
                }
                Err(AppError::AliasTaken) => {
                    debug!(
                        request_id = ctx.request_id(),
                        alias = %alias,
                        attempt,
                        "Generated alias collided"
                    );
                    metrics::counter!("shortlink_alias_collisions_total").increment(1);
                }
                Err(e) => {
                    error!(
                        request_id = ctx.request_id(),
                        url = %original_url,
                        alias = %alias,
                        attempt,
                        error = %e,
                        "Failed to save url"
                    );
                    return Err(e);
                }
            }
        }

        // TODO: return an allocation error here once clients can handle a 5xx
        // for exhausted retries instead of a 201 with nothing stored.
        warn!(
            request_id = ctx.request_id(),
            url = %original_url,
            attempts = MAX_ALIAS_ATTEMPTS,
            "All generated aliases collided, nothing was stored"
        );
        metrics::counter!("shortlink_alias_attempts_exhausted_total").increment(1);

        Ok(())
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<ShortLink, AppError> {
        self.repository.get(ctx, id).await.inspect_err(|e| {
            if !matches!(e, AppError::NotFound) {
                error!(request_id = ctx.request_id(), id, error = %e, "Failed to get url");
            }
        })
    }

    /// Lists every link, oldest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<ShortLink>, AppError> {
        self.repository.list(ctx).await.inspect_err(|e| {
            error!(request_id = ctx.request_id(), error = %e, "Failed to list urls");
        })
    }

    /// Points `id` at `new_url`, replacing its alias only when one is given.
    ///
    /// A provided alias is composed with the base URL exactly like in
    /// [`Self::save`]. A collision surfaces as [`AppError::AliasTaken`].
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        new_url: String,
        alias: Option<String>,
    ) -> Result<(), AppError> {
        let short_url = alias
            .as_deref()
            .map(|code| build_short_url(&self.base_url, code));

        self.repository
            .update(ctx, id, new_url.clone(), short_url)
            .await
            .inspect_err(|e| {
                error!(
                    request_id = ctx.request_id(),
                    id,
                    url = %new_url,
                    alias = alias.as_deref().unwrap_or(""),
                    error = %e,
                    "Failed to update url"
                );
            })
    }

    /// Removes a link. Unknown ids succeed.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        self.repository.delete(ctx, id).await.inspect_err(|e| {
            error!(request_id = ctx.request_id(), id, error = %e, "Failed to delete url");
        })
    }

    /// Checks store connectivity.
    pub async fn ping(&self, ctx: &RequestContext) -> Result<(), AppError> {
        self.repository.ping(ctx).await
    }
}
