//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{DynUrlService, UrlService};
use crate::domain::repositories::UrlRepository;
use crate::utils::alias_generator::AliasGenerator;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<DynUrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<DynUrlService>) -> Self {
        Self { url_service }
    }

    /// Wires a [`UrlService`] from a repository, a generator and a base URL.
    pub fn from_parts(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn AliasGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self::new(Arc::new(UrlService::new(repository, generator, base_url)))
    }
}
