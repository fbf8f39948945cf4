//! Domain layer containing business entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`context`] - Request-scoped values passed explicitly through every call
//!
//! The domain layer has no dependencies on the application, infrastructure or
//! presentation layers.

pub mod context;
pub mod entities;
pub mod repositories;

pub use context::RequestContext;
