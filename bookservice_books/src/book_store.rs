pub use in_memory_book_store::InMemoryBookStore;

use crate::api::{Book, BookStatus, Isbn};

mod in_memory_book_store;

#[derive(thiserror::Error, Debug)]
pub enum BookStoreError {
    #[error("Book {0} not found")]
    NotFound(Isbn),

    #[error("Other error {0}")]
    Other(String),
}

/// Fields of a book before the store has assigned its ISBN and author ids.
/// The status is already validated and canonical at this point.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub publication_date: String,
    pub language: String,
    pub num_pages: i32,
    pub status: BookStatus,
    pub authors: Vec<String>,
}

#[async_trait::async_trait]
pub trait BookStore {
    /// Saves a new book, returns it with the ISBN and author ids assigned
    async fn save(&self, new_book: NewBook) -> Result<Book, BookStoreError>;
    /// Retrieves a book by its ISBN
    async fn get_by_isbn(&self, isbn: Isbn) -> Result<Book, BookStoreError>;
    /// Replaces the status of a book, returns the updated book
    async fn update_status(&self, isbn: Isbn, status: BookStatus)
        -> Result<Book, BookStoreError>;
    /// Removes a book from the store; stores may treat an unknown ISBN as a
    /// no-op or report it as NotFound
    async fn delete(&self, isbn: Isbn) -> Result<(), BookStoreError>;
}
