//! Book handlers
//!
//! Input checks run in the order the routes promise: path id first,
//! then the body, then existence in the store.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use super::handlers::AppState;
use crate::error::{ApiError, Result, INPUT_MUST_BE_NUMBER};
use crate::models::{Book, BookId, BookRequest};

/// Handler for GET /api/books
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let books = state.books.read().await;
    Json(books.find_all().to_vec())
}

/// Handler for GET /api/books/:id
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>> {
    let id = parse_id(&id)?;

    let books = state.books.read().await;
    let book = books.find_by_id(id)?;

    Ok(Json(book.clone()))
}

/// Handler for POST /api/books
///
/// An unreadable body counts as a body without a title.
pub async fn create_book(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>)> {
    let req = body_or_default(payload);

    let mut books = state.books.write().await;
    let book = books.insert(req.title, req.author)?;

    info!(id = book.id, "Book created");
    Ok((StatusCode::CREATED, Json(book)))
}

/// Handler for PUT /api/books/:id
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<BookRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    let req = body_or_default(payload);

    let mut books = state.books.write().await;
    books.update(id, req.title, req.author)?;

    debug!(id, "Book updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /api/books/:id
///
/// Has no numeric precondition: an id that does not parse cannot match
/// any book and is reported as not found.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id).map_err(|_| ApiError::book_not_found())?;

    let mut books = state.books.write().await;
    books.delete(id)?;

    info!(id, "Book deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<BookId> {
    raw.parse()
        .map_err(|_| ApiError::Validation(INPUT_MUST_BE_NUMBER.to_string()))
}

fn body_or_default(payload: std::result::Result<Json<BookRequest>, JsonRejection>) -> BookRequest {
    match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable book body");
            BookRequest::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BAD_REQUEST, BOOK_TITLE_REQUIRED};
    use crate::store::{BookStore, UserStore};

    fn state() -> AppState {
        AppState::new(BookStore::seeded(), UserStore::default())
    }

    fn request(title: Option<&str>, author: Option<&str>) -> BookRequest {
        BookRequest {
            title: title.map(str::to_string),
            author: author.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Ok(42));
        assert_eq!(parse_id("-3"), Ok(-3));
        assert_eq!(
            parse_id("invalidId"),
            Err(ApiError::Validation(INPUT_MUST_BE_NUMBER.to_string()))
        );
        assert!(parse_id("").is_err());
        assert!(parse_id("1.5").is_err());
    }

    #[tokio::test]
    async fn test_list_books() {
        let response = list_books(State(state())).await;
        assert_eq!(response.len(), 3);
    }

    #[tokio::test]
    async fn test_get_book() {
        let response = get_book(State(state()), Path("2".to_string())).await.unwrap();
        assert_eq!(response.id, 2);

        let missing = get_book(State(state()), Path("999".to_string())).await;
        assert_eq!(missing.unwrap_err(), ApiError::book_not_found());
    }

    #[tokio::test]
    async fn test_create_and_update_book() {
        let state = state();

        let (status, Json(book)) = create_book(
            State(state.clone()),
            Ok(Json(request(Some("New Book"), Some("John Doe")))),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(book.id, 4);

        let status = update_book(
            State(state.clone()),
            Path(book.id.to_string()),
            Ok(Json(request(Some("Renamed"), None))),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(state.books.read().await.find_by_id(4).unwrap().title, "Renamed");
    }

    #[tokio::test]
    async fn test_missing_title_messages_differ_by_route() {
        let state = state();

        let created = create_book(State(state.clone()), Ok(Json(request(None, None)))).await;
        assert_eq!(
            created.unwrap_err(),
            ApiError::Validation(BOOK_TITLE_REQUIRED.to_string())
        );

        let updated = update_book(
            State(state),
            Path("1".to_string()),
            Ok(Json(request(None, Some("Someone")))),
        )
        .await;
        assert_eq!(
            updated.unwrap_err(),
            ApiError::Validation(BAD_REQUEST.to_string())
        );
    }

    #[tokio::test]
    async fn test_delete_book_non_numeric_is_not_found() {
        let result = delete_book(State(state()), Path("abc".to_string())).await;
        assert_eq!(result.unwrap_err(), ApiError::book_not_found());
    }
}
