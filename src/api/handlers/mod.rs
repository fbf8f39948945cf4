//! HTTP request handlers for API endpoints.

pub mod health;
pub mod urls;

pub use health::health_handler;
pub use urls::{
    delete_url_handler, list_urls_handler, redirect_handler, save_url_handler, update_url_handler,
};
