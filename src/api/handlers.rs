//! Shared handler state and the handlers not tied to a resource.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::Json;

use crate::error::{ApiError, ROUTE_NOT_FOUND};
use crate::models::HealthResponse;
use crate::store::{BookStore, UserStore};

/// Application state shared across all handlers.
///
/// Built once at startup. Books are mutable and sit behind an
/// `RwLock`; users are never written after construction.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<RwLock<BookStore>>,
    pub users: Arc<UserStore>,
}

impl AppState {
    /// Creates a new AppState from the given stores.
    pub fn new(books: BookStore, users: UserStore) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
            users: Arc::new(users),
        }
    }

    /// Creates the state the server starts with, holding the seed data.
    pub fn seeded() -> Self {
        Self::new(BookStore::seeded(), UserStore::seeded())
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for any path or method no route handles.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse};

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_route_not_found() {
        let response = route_not_found().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_seeded_state() {
        let state = AppState::seeded();
        assert_eq!(state.books.read().await.len(), 3);
        assert_eq!(state.users.len(), 2);
    }
}
