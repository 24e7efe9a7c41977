//! Book Store Module
//!
//! Ordered book collection with integer ids.

use crate::error::{ApiError, Result, BAD_REQUEST, BOOK_TITLE_REQUIRED};
use crate::models::{Book, BookId};

// == Book Store ==
/// Books in insertion order.
#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    // == Constructors ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given books.
    ///
    /// Ids are taken as-is; callers must not pass duplicates.
    #[cfg(test)]
    pub(crate) fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Creates the store the server starts with.
    pub fn seeded() -> Self {
        let seed = [
            ("The Rust Programming Language", "Steve Klabnik"),
            ("Programming Rust", "Jim Blandy"),
            ("Rust in Action", "Tim McNamara"),
        ];

        let mut store = Self::new();
        for (title, author) in seed {
            store.append(title.to_string(), Some(author.to_string()));
        }
        store
    }

    // == Find ==
    /// Returns all books in insertion order.
    pub fn find_all(&self) -> &[Book] {
        &self.books
    }

    /// Looks up a book by id.
    pub fn find_by_id(&self, id: BookId) -> Result<&Book> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or_else(ApiError::book_not_found)
    }

    // == Insert ==
    /// Appends a new book and returns it with its assigned id.
    ///
    /// Fails if the title is missing or empty.
    pub fn insert(&mut self, title: Option<String>, author: Option<String>) -> Result<Book> {
        let title = non_empty(title)
            .ok_or_else(|| ApiError::Validation(BOOK_TITLE_REQUIRED.to_string()))?;

        Ok(self.append(title, author))
    }

    // == Update ==
    /// Replaces title and author of an existing book. The id never changes.
    ///
    /// The title is checked before the id is looked up.
    pub fn update(
        &mut self,
        id: BookId,
        title: Option<String>,
        author: Option<String>,
    ) -> Result<()> {
        let title =
            non_empty(title).ok_or_else(|| ApiError::Validation(BAD_REQUEST.to_string()))?;

        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(ApiError::book_not_found)?;

        book.title = title;
        book.author = author;
        Ok(())
    }

    // == Delete ==
    /// Removes a book by id.
    pub fn delete(&mut self, id: BookId) -> Result<()> {
        let index = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(ApiError::book_not_found)?;

        self.books.remove(index);
        Ok(())
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Id the next inserted book receives: max existing id + 1, or 1.
    pub fn next_id(&self) -> BookId {
        self.books.iter().map(|book| book.id).max().unwrap_or(0) + 1
    }

    fn append(&mut self, title: String, author: Option<String>) -> Book {
        let book = Book {
            id: self.next_id(),
            title,
            author,
        };
        self.books.push(book.clone());
        book
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn title(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_seeded_store() {
        let store = BookStore::seeded();
        assert_eq!(store.len(), 3);
        let ids: Vec<BookId> = store.find_all().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_assigns_ids() {
        let mut store = BookStore::new();
        assert!(store.is_empty());

        let first = store.insert(title("A"), None).unwrap();
        let second = store.insert(title("B"), title("Someone")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.author.as_deref(), Some("Someone"));
        assert_eq!(store.find_by_id(2).unwrap(), &second);
    }

    #[test]
    fn test_insert_uses_max_id_not_len() {
        let mut store = BookStore::with_books(vec![Book {
            id: 10,
            title: "Ten".to_string(),
            author: None,
        }]);

        let book = store.insert(title("Eleven"), None).unwrap();
        assert_eq!(book.id, 11);
    }

    #[test]
    fn test_insert_requires_title() {
        let mut store = BookStore::new();

        let missing = store.insert(None, title("Someone"));
        assert_eq!(
            missing,
            Err(ApiError::Validation(BOOK_TITLE_REQUIRED.to_string()))
        );

        let empty = store.insert(title(""), None);
        assert!(matches!(empty, Err(ApiError::Validation(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_by_id_missing() {
        let store = BookStore::seeded();
        assert_eq!(store.find_by_id(999), Err(ApiError::book_not_found()));
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut store = BookStore::seeded();

        store.update(2, title("Renamed"), None).unwrap();

        let book = store.find_by_id(2).unwrap();
        assert_eq!(book.id, 2);
        assert_eq!(book.title, "Renamed");
        assert!(book.author.is_none());
    }

    #[test]
    fn test_update_checks_title_before_existence() {
        let mut store = BookStore::seeded();

        let result = store.update(999, None, None);
        assert_eq!(result, Err(ApiError::Validation(BAD_REQUEST.to_string())));

        let result = store.update(999, title("X"), None);
        assert_eq!(result, Err(ApiError::book_not_found()));
    }

    #[test]
    fn test_delete() {
        let mut store = BookStore::seeded();

        store.delete(1).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.find_by_id(1).is_err());

        assert_eq!(store.delete(1), Err(ApiError::book_not_found()));
    }

    #[test]
    fn test_id_reused_after_deleting_max() {
        let mut store = BookStore::seeded();
        store.delete(3).unwrap();

        let book = store.insert(title("Again"), None).unwrap();
        assert_eq!(book.id, 3);
    }
}
