use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, AtomicI64, Ordering};

use crate::api::{Author, Book, BookStatus, Isbn, Review};
use crate::book_store::{BookStore, BookStoreError, NewBook};

pub struct InMemoryBookStore {
    isbn_sequence: AtomicI64,
    review_sequence: AtomicI32,
    books: parking_lot::RwLock<HashMap<Isbn, Book>>,
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self {
            isbn_sequence: AtomicI64::new(1),
            review_sequence: AtomicI32::new(1),
            books: Default::default(),
        }
    }
}

impl InMemoryBookStore {
    /// Attaches a review to an existing book. Review creation has no HTTP
    /// surface of its own; this seeds the data behind the advertised review
    /// links.
    pub fn add_review(&self, isbn: Isbn, comment: &str) -> Result<Review, BookStoreError> {
        let mut locked_books = self.books.write();
        let book = locked_books
            .get_mut(&isbn)
            .ok_or(BookStoreError::NotFound(isbn))?;
        let review = Review {
            id: self.review_sequence.fetch_add(1, Ordering::Relaxed),
            comment: comment.to_string(),
        };
        book.reviews.push(review.clone());
        Ok(review)
    }
}

#[async_trait::async_trait]
impl BookStore for InMemoryBookStore {
    async fn save(&self, new_book: NewBook) -> Result<Book, BookStoreError> {
        let isbn = self.isbn_sequence.fetch_add(1, Ordering::Relaxed);
        let authors = new_book
            .authors
            .into_iter()
            .enumerate()
            .map(|(index, name)| Author {
                id: index as i32 + 1,
                name,
            })
            .collect();
        let book = Book {
            isbn,
            title: new_book.title,
            publication_date: new_book.publication_date,
            language: new_book.language,
            num_pages: new_book.num_pages,
            status: new_book.status,
            authors,
            reviews: vec![],
        };
        self.books.write().insert(isbn, book.clone());
        Ok(book)
    }

    async fn get_by_isbn(&self, isbn: Isbn) -> Result<Book, BookStoreError> {
        self.books
            .read()
            .get(&isbn)
            .cloned()
            .ok_or(BookStoreError::NotFound(isbn))
    }

    async fn update_status(&self, isbn: Isbn, status: BookStatus) -> Result<Book, BookStoreError> {
        let mut locked_books = self.books.write();
        let book = locked_books
            .get_mut(&isbn)
            .ok_or(BookStoreError::NotFound(isbn))?;
        book.status = status;
        Ok(book.clone())
    }

    async fn delete(&self, isbn: Isbn) -> Result<(), BookStoreError> {
        // Deleting an unknown ISBN is an idempotent no-op
        self.books.write().remove(&isbn);
        Ok(())
    }
}
