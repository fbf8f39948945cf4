//! Process-local implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

use crate::domain::RequestContext;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    links: Vec<ShortLink>,
}

impl Inner {
    fn alias_taken(&self, alias: &str, except_id: Option<i64>) -> bool {
        self.links
            .iter()
            .any(|l| l.alias == alias && Some(l.id) != except_id)
    }
}

/// In-memory store used by tests and by `STORAGE_BACKEND=memory`.
///
/// Uniqueness check and write happen under one lock, giving the same
/// at-most-one-winner behaviour as the database constraint. Records are kept
/// in insertion order, which is also creation order.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    inner: Mutex<Inner>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn save(&self, _ctx: &RequestContext, new_link: NewShortLink) -> Result<(), AppError> {
        let mut inner = self.lock();

        if inner.alias_taken(&new_link.alias, None) {
            return Err(AppError::AliasTaken);
        }

        inner.next_id += 1;
        let link = ShortLink::new(
            inner.next_id,
            new_link.original_url,
            new_link.alias,
            Utc::now(),
        );
        inner.links.push(link);

        Ok(())
    }

    async fn list(&self, _ctx: &RequestContext) -> Result<Vec<ShortLink>, AppError> {
        Ok(self.lock().links.clone())
    }

    async fn get(&self, _ctx: &RequestContext, id: i64) -> Result<ShortLink, AppError> {
        self.lock()
            .links
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn update(
        &self,
        _ctx: &RequestContext,
        id: i64,
        new_url: String,
        alias: Option<String>,
    ) -> Result<(), AppError> {
        let mut inner = self.lock();

        if let Some(alias) = &alias
            && inner.alias_taken(alias, Some(id))
        {
            return Err(AppError::AliasTaken);
        }

        if let Some(link) = inner.links.iter_mut().find(|l| l.id == id) {
            link.original_url = new_url;
            if let Some(alias) = alias {
                link.alias = alias;
            }
        }

        Ok(())
    }

    async fn delete(&self, _ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        self.lock().links.retain(|l| l.id != id);
        Ok(())
    }

    async fn ping(&self, _ctx: &RequestContext) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ctx() -> RequestContext {
        RequestContext::background()
    }

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let repo = InMemoryUrlRepository::new();

        repo.save(&ctx(), NewShortLink::new("https://a.com", "a"))
            .await
            .unwrap();
        repo.save(&ctx(), NewShortLink::new("https://b.com", "b"))
            .await
            .unwrap();

        let links = repo.list(&ctx()).await.unwrap();
        assert_eq!(links.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(links[0].created_at <= links[1].created_at);
    }

    #[tokio::test]
    async fn test_save_duplicate_alias() {
        let repo = InMemoryUrlRepository::new();
        repo.save(&ctx(), NewShortLink::new("https://a.com", "same"))
            .await
            .unwrap();

        let result = repo
            .save(&ctx(), NewShortLink::new("https://b.com", "same"))
            .await;

        assert!(matches!(result, Err(AppError::AliasTaken)));
        assert_eq!(repo.list(&ctx()).await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_single_winner() {
        let repo = Arc::new(InMemoryUrlRepository::new());

        let handles = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.save(
                        &RequestContext::background(),
                        NewShortLink::new(format!("https://{i}.com"), "contested"),
                    )
                    .await
                })
            })
            .collect::<Vec<_>>();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.list(&ctx()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let repo = InMemoryUrlRepository::new();
        assert!(matches!(repo.get(&ctx(), 99).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_alias_to_own_value() {
        let repo = InMemoryUrlRepository::new();
        repo.save(&ctx(), NewShortLink::new("https://a.com", "mine"))
            .await
            .unwrap();

        let result = repo
            .update(&ctx(), 1, "https://b.com".into(), Some("mine".into()))
            .await;

        assert!(result.is_ok());
        assert_eq!(repo.get(&ctx(), 1).await.unwrap().original_url, "https://b.com");
    }

    #[tokio::test]
    async fn test_update_alias_conflict() {
        let repo = InMemoryUrlRepository::new();
        repo.save(&ctx(), NewShortLink::new("https://a.com", "a"))
            .await
            .unwrap();
        repo.save(&ctx(), NewShortLink::new("https://b.com", "b"))
            .await
            .unwrap();

        let result = repo
            .update(&ctx(), 2, "https://c.com".into(), Some("a".into()))
            .await;

        assert!(matches!(result, Err(AppError::AliasTaken)));
        assert_eq!(repo.get(&ctx(), 2).await.unwrap().original_url, "https://b.com");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_ok() {
        let repo = InMemoryUrlRepository::new();
        assert!(repo.update(&ctx(), 5, "https://x.com".into(), None).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryUrlRepository::new();
        repo.save(&ctx(), NewShortLink::new("https://a.com", "a"))
            .await
            .unwrap();

        repo.delete(&ctx(), 1).await.unwrap();
        repo.delete(&ctx(), 1).await.unwrap();

        assert!(repo.list(&ctx()).await.unwrap().is_empty());
    }
}
