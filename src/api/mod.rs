//! API Module
//!
//! HTTP handlers and routing for the REST API.
//!
//! # Endpoints
//! - `GET /api/books` - List all books
//! - `GET /api/books/:id` - Fetch one book
//! - `POST /api/books` - Create a book
//! - `PUT /api/books/:id` - Replace a book's title and author
//! - `DELETE /api/books/:id` - Delete a book
//! - `GET /api/users` - List all users
//! - `POST /api/users/:email/verify-security-question` - Check security answers
//! - `GET /health` - Health check endpoint

pub mod books;
pub mod handlers;
pub mod routes;
pub mod users;

pub use handlers::{health_handler, route_not_found, AppState};
pub use routes::{create_router, handle_panic};
