#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shortlink::AppError;
use shortlink::domain::RequestContext;
use shortlink::domain::entities::{NewShortLink, ShortLink};
use shortlink::domain::repositories::UrlRepository;
use shortlink::infrastructure::persistence::InMemoryUrlRepository;
use shortlink::state::AppState;
use shortlink::utils::alias_generator::AliasGenerator;

pub const BASE_URL: &str = "http://localhost";

/// Generator that replays a fixed list of aliases, then repeats the last one.
pub struct ScriptedAliasGenerator {
    aliases: Mutex<Vec<String>>,
}

impl ScriptedAliasGenerator {
    pub fn new(aliases: &[&str]) -> Self {
        let mut aliases: Vec<String> = aliases.iter().map(|a| a.to_string()).collect();
        aliases.reverse();
        Self {
            aliases: Mutex::new(aliases),
        }
    }
}

impl AliasGenerator for ScriptedAliasGenerator {
    fn generate(&self) -> String {
        let mut aliases = self.aliases.lock().unwrap();
        if aliases.len() > 1 {
            aliases.pop().unwrap()
        } else {
            aliases.last().cloned().unwrap_or_default()
        }
    }
}

/// Builds state over a fresh in-memory store, returning the store for inspection.
pub fn create_test_state(aliases: &[&str]) -> (AppState, Arc<InMemoryUrlRepository>) {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let repository: Arc<dyn UrlRepository> = repo.clone();
    let generator: Arc<dyn AliasGenerator> = Arc::new(ScriptedAliasGenerator::new(aliases));

    (AppState::from_parts(repository, generator, BASE_URL), repo)
}

/// Store whose every call fails as if the connection pool were closed.
pub struct FailingUrlRepository;

#[async_trait]
impl UrlRepository for FailingUrlRepository {
    async fn save(&self, _ctx: &RequestContext, _link: NewShortLink) -> Result<(), AppError> {
        Err(AppError::Store(sqlx::Error::PoolClosed))
    }

    async fn list(&self, _ctx: &RequestContext) -> Result<Vec<ShortLink>, AppError> {
        Err(AppError::Store(sqlx::Error::PoolClosed))
    }

    async fn get(&self, _ctx: &RequestContext, _id: i64) -> Result<ShortLink, AppError> {
        Err(AppError::Store(sqlx::Error::PoolClosed))
    }

    async fn update(
        &self,
        _ctx: &RequestContext,
        _id: i64,
        _new_url: String,
        _alias: Option<String>,
    ) -> Result<(), AppError> {
        Err(AppError::Store(sqlx::Error::PoolClosed))
    }

    async fn delete(&self, _ctx: &RequestContext, _id: i64) -> Result<(), AppError> {
        Err(AppError::Store(sqlx::Error::PoolClosed))
    }

    async fn ping(&self, _ctx: &RequestContext) -> Result<(), AppError> {
        Err(AppError::Store(sqlx::Error::PoolClosed))
    }
}

/// Builds state over [`FailingUrlRepository`].
pub fn create_failing_state() -> AppState {
    let repository: Arc<dyn UrlRepository> = Arc::new(FailingUrlRepository);
    let generator: Arc<dyn AliasGenerator> = Arc::new(ScriptedAliasGenerator::new(&["gen00001"]));

    AppState::from_parts(repository, generator, BASE_URL)
}
