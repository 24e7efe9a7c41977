//! Bookshelf API - A small JSON API over in-memory data
//!
//! Serves CRUD operations on a book collection and positional
//! security-question checks for a fixed set of users.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{ApiError, Result};
