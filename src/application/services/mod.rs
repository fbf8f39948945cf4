//! Business logic services for the application layer.

pub mod url_service;

pub use url_service::{MAX_ALIAS_ATTEMPTS, UrlService, build_short_url};

use crate::domain::repositories::UrlRepository;
use crate::utils::alias_generator::AliasGenerator;

/// Service wired with trait objects, as shared through [`crate::state::AppState`].
pub type DynUrlService = UrlService<dyn UrlRepository, dyn AliasGenerator>;
