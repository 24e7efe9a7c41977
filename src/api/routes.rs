//! API Routes
//!
//! Configures the Axum router with all endpoints, the 404 fallback and
//! the 500 fault boundary.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use super::books::{create_book, delete_book, get_book, list_books, update_book};
use super::handlers::{health_handler, route_not_found, AppState};
use super::users::{list_users, verify_security_questions};
use crate::error::ApiError;

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Catch panic: any handler panic becomes a generic 500
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
///
/// Unknown paths, and unsupported methods on known paths, fall through
/// to a `Route not found` 404.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .nest("/api", api_routes())
        .route("/health", get(health_handler).fallback(route_not_found));

    with_middleware(routes, state)
}

/// Adds the fallback and middleware stack to `routes` and binds the state.
fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    routes
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(list_books).post(create_book).fallback(route_not_found),
        )
        .route(
            "/books/:id",
            get(get_book)
                .put(update_book)
                .delete(delete_book)
                .fallback(route_not_found),
        )
        .route("/users", get(list_users).fallback(route_not_found))
        .route(
            "/users/:email/verify-security-question",
            post(verify_security_questions).fallback(route_not_found),
        )
}

/// Turns a handler panic into the generic 500 response.
///
/// The panic payload is logged and never sent to the client.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "Handler panicked");
    ApiError::internal().into_response()
}
