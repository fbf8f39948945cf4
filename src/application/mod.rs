//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository calls and
//! business rules, and provide a clean API for HTTP handlers and the admin CLI.
//!
//! - [`services::url_service::UrlService`] - Alias allocation, resolution and CRUD

pub mod services;
