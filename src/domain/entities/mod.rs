//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation uses a
//! separate input struct ([`NewShortLink`]) since the store assigns `id` and
//! `created_at`.

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
